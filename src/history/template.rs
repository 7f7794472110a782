//! Builds a history row from a name and optional detail

use super::icons::IconResolver;
use crate::locale::Locale;
use crate::types::HistoryItem;
use chrono::Local;

pub fn render_item(
    locale: &Locale,
    icons: IconResolver,
    name: &str,
    detail: Option<&str>,
) -> HistoryItem {
    HistoryItem {
        name: name.to_string(),
        label: locale.localize(name),
        detail: detail
            .filter(|d| !d.is_empty())
            .map(|d| locale.localize(d)),
        icon: icons(name),
        recorded_at: Local::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::icons;

    #[test]
    fn localizes_name_and_detail() {
        let locale = Locale::from_json(
            r#"{ "lang": "ko", "messages": { "Flip": "뒤집기", "Flip X": "좌우 뒤집기" } }"#,
        )
        .unwrap();

        let item = render_item(&locale, icons::phosphor_icon, icons::FLIP, Some("Flip X"));

        assert_eq!(item.name, "Flip");
        assert_eq!(item.label, "뒤집기");
        assert_eq!(item.detail.as_deref(), Some("좌우 뒤집기"));
        assert_eq!(item.icon, icons::phosphor_icon(icons::FLIP));
        assert_eq!(item.display_text(), "뒤집기 (좌우 뒤집기)");
    }

    #[test]
    fn empty_detail_is_dropped() {
        let item = render_item(&Locale::default(), icons::phosphor_icon, icons::CROP, Some(""));
        assert_eq!(item.detail, None);
        assert_eq!(item.display_text(), "Crop");
    }
}
