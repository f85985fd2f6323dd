//! Display formatting for content values: French dates, star ratings,
//! category colours, and weekday schedule lookup.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::macros::format_description;

use crate::content::HoursItem;

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Format an ISO date (`YYYY-MM-DD`, optionally followed by a time part) as
/// a long French date, e.g. `"15 janvier 2024"`. Unparseable input is
/// returned unchanged.
pub fn format_date_fr(raw: &str) -> String {
    let Some(date) = parse_iso_date(raw) else {
        return raw.to_owned();
    };
    let month = MONTHS_FR[usize::from(u8::from(date.month())) - 1];
    format!("{} {month} {}", date.day(), date.year())
}

fn parse_iso_date(raw: &str) -> Option<time::Date> {
    let trimmed = raw.trim();
    let head = trimmed.get(..10)?;
    if trimmed.len() > 10 && !matches!(trimmed.as_bytes()[10], b'T' | b' ') {
        return None;
    }
    time::Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

/// Five-slot star string, e.g. `"★★★★☆"` for 4. Ratings above 5 clamp.
pub fn format_rating(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Badge colour class for news cards.
pub fn category_badge_class(category: &str) -> &'static str {
    match category {
        "FDJ" => "badge--blue",
        "Actualité" => "badge--green",
        "Presse" => "badge--purple",
        _ => "badge--primary",
    }
}

/// Tone class for the category badge inside the news detail dialog.
pub fn category_tone_class(category: &str) -> &'static str {
    match category {
        "FDJ" => "tone--blue",
        "Presse" => "tone--green",
        "Actualité" => "tone--purple",
        _ => "tone--gray",
    }
}

/// Convert a Sunday-first weekday (0 = Sunday) to the Monday-first order the
/// hours table uses.
pub fn monday_first_index(sunday_first: u8) -> usize {
    match sunday_first % 7 {
        0 => 6,
        day => usize::from(day - 1),
    }
}

/// Today's entry in a Monday-first hours table, falling back to the first
/// entry when the table is short.
pub fn today_schedule(hours: &[HoursItem], monday_first: usize) -> Option<&HoursItem> {
    today_row(hours, monday_first).and_then(|row| hours.get(row))
}

/// Row index of the entry `today_schedule` resolves to.
pub fn today_row(hours: &[HoursItem], monday_first: usize) -> Option<usize> {
    if monday_first < hours.len() {
        Some(monday_first)
    } else if hours.is_empty() {
        None
    } else {
        Some(0)
    }
}

/// Whether a row is highlighted: flagged in the document, or the resolved
/// entry for today.
pub fn is_today_row(item: &HoursItem, row: usize, today: Option<usize>) -> bool {
    item.today || today == Some(row)
}

/// Current weekday, Sunday-first (0 = Sunday).
pub fn current_weekday() -> u8 {
    #[cfg(feature = "hydrate")]
    {
        u8::try_from(js_sys::Date::new_0().get_day()).unwrap_or(0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().weekday().number_days_from_sunday()
    }
}

/// Last two words of the brand name, shown in the compact header.
pub fn short_brand_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    words[words.len().saturating_sub(2)..].join(" ")
}

/// Link target for an outbound href: `tel:` and `mailto:` stay in the
/// current context, everything else opens a new one.
pub fn link_target(href: &str) -> &'static str {
    if href.starts_with("tel:") || href.starts_with("mailto:") { "_self" } else { "_blank" }
}
