use super::*;
use crate::content::{self, NewsItem};

fn first_news() -> (Vec<NewsItem>, NewsItem) {
    let news = content::load().unwrap().news;
    let first = news[0].clone();
    (news, first)
}

#[test]
fn dialog_starts_closed() {
    let dialog = Dialog::<NewsItem>::default();
    assert!(!dialog.is_open());
    assert!(dialog.selected().is_none());
}

#[test]
fn opening_twice_keeps_selection() {
    let (_, item) = first_news();
    let mut dialog = Dialog::default();
    dialog.open(item.clone());
    dialog.open(item.clone());
    assert!(dialog.is_open());
    assert_eq!(dialog.selected(), Some(&item));
}

#[test]
fn closing_twice_is_noop() {
    let (_, item) = first_news();
    let mut dialog = Dialog::default();
    dialog.open(item);
    dialog.close();
    dialog.close();
    assert!(!dialog.is_open());
}

#[test]
fn open_close_cycle_leaves_content_list_untouched() {
    let (news, item) = first_news();
    let snapshot = news.clone();
    let mut dialog = Dialog::default();
    for _ in 0..3 {
        dialog.open(item.clone());
        dialog.close();
    }
    assert_eq!(news, snapshot);
}

#[test]
fn legal_dialog_switches_notice() {
    let mut dialog = Dialog::default();
    dialog.open(LegalNotice::Mentions);
    dialog.open(LegalNotice::Privacy);
    assert_eq!(dialog.selected(), Some(&LegalNotice::Privacy));
}
