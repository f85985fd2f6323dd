use super::*;

fn hours(days: &[&str]) -> Vec<HoursItem> {
    days.iter()
        .map(|day| HoursItem { day: (*day).to_owned(), hours: "9h - 19h".to_owned(), today: false })
        .collect()
}

// =============================================================
// Dates
// =============================================================

#[test]
fn format_date_fr_uses_long_month_names() {
    assert_eq!(format_date_fr("2024-01-15"), "15 janvier 2024");
    assert_eq!(format_date_fr("2023-08-01"), "1 août 2023");
    assert_eq!(format_date_fr("2023-12-31"), "31 décembre 2023");
}

#[test]
fn format_date_fr_accepts_time_suffix() {
    assert_eq!(format_date_fr("2024-02-29T10:30:00Z"), "29 février 2024");
    assert_eq!(format_date_fr("2024-03-12 08:00"), "12 mars 2024");
}

#[test]
fn format_date_fr_returns_unparseable_input() {
    assert_eq!(format_date_fr("bientôt"), "bientôt");
    assert_eq!(format_date_fr("2024-13-01"), "2024-13-01");
    assert_eq!(format_date_fr("2024-01-15x"), "2024-01-15x");
    assert_eq!(format_date_fr(""), "");
}

// =============================================================
// Ratings
// =============================================================

#[test]
fn format_rating_fills_stars() {
    assert_eq!(format_rating(5), "★★★★★");
    assert_eq!(format_rating(3), "★★★☆☆");
    assert_eq!(format_rating(0), "☆☆☆☆☆");
}

#[test]
fn format_rating_clamps_above_five() {
    assert_eq!(format_rating(9), "★★★★★");
}

// =============================================================
// Categories
// =============================================================

#[test]
fn card_badges_map_known_categories() {
    assert_eq!(category_badge_class("FDJ"), "badge--blue");
    assert_eq!(category_badge_class("Actualité"), "badge--green");
    assert_eq!(category_badge_class("Presse"), "badge--purple");
    assert_eq!(category_badge_class("Autre"), "badge--primary");
}

#[test]
fn dialog_tones_map_known_categories() {
    assert_eq!(category_tone_class("FDJ"), "tone--blue");
    assert_eq!(category_tone_class("Presse"), "tone--green");
    assert_eq!(category_tone_class("Actualité"), "tone--purple");
    assert_eq!(category_tone_class("fdj"), "tone--gray");
}

// =============================================================
// Weekday schedule
// =============================================================

#[test]
fn sunday_moves_to_end_of_week() {
    assert_eq!(monday_first_index(0), 6);
    assert_eq!(monday_first_index(1), 0);
    assert_eq!(monday_first_index(6), 5);
}

#[test]
fn today_schedule_picks_weekday_entry() {
    let table = hours(&["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche"]);
    assert_eq!(today_schedule(&table, monday_first_index(0)).unwrap().day, "Dimanche");
    assert_eq!(today_schedule(&table, monday_first_index(3)).unwrap().day, "Mercredi");
}

#[test]
fn today_schedule_falls_back_to_first_entry() {
    let table = hours(&["Lundi", "Mardi"]);
    assert_eq!(today_schedule(&table, 5).unwrap().day, "Lundi");
}

#[test]
fn today_schedule_empty_table_is_none() {
    assert!(today_schedule(&[], 2).is_none());
}

#[test]
fn short_table_highlights_the_fallback_row() {
    let table = hours(&["Lundi - Samedi", "Dimanche"]);
    let friday = monday_first_index(5);
    let today = today_row(&table, friday);
    assert_eq!(today, Some(0));
    assert!(is_today_row(&table[0], 0, today));
    assert!(!is_today_row(&table[1], 1, today));
    assert_eq!(today_schedule(&table, friday).unwrap().day, table[0].day);
}

#[test]
fn full_table_highlights_the_weekday_row() {
    let table = hours(&["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche"]);
    let today = today_row(&table, monday_first_index(3));
    assert_eq!(today, Some(2));
    let highlighted: Vec<usize> =
        (0..table.len()).filter(|row| is_today_row(&table[*row], *row, today)).collect();
    assert_eq!(highlighted, vec![2]);
}

#[test]
fn document_flag_highlights_without_a_resolved_day() {
    let mut table = hours(&["Lundi", "Mardi"]);
    table[1].today = true;
    assert!(is_today_row(&table[1], 1, None));
    assert!(!is_today_row(&table[0], 0, None));
    assert_eq!(today_row(&[], 3), None);
}

#[test]
fn current_weekday_is_in_range() {
    assert!(current_weekday() < 7);
}

// =============================================================
// Misc
// =============================================================

#[test]
fn short_brand_name_keeps_last_two_words() {
    assert_eq!(short_brand_name("Tabac Presse Les Allumettes"), "Les Allumettes");
    assert_eq!(short_brand_name("Allumettes"), "Allumettes");
    assert_eq!(short_brand_name(""), "");
}

#[test]
fn link_target_keeps_tel_in_page() {
    assert_eq!(link_target("tel:+33164937398"), "_self");
    assert_eq!(link_target("mailto:contact@example.test"), "_self");
    assert_eq!(link_target("https://g.page/shop"), "_blank");
}
