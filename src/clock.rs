use chrono::{NaiveDate, NaiveDateTime, Weekday};

use crate::i18n::Lang;

pub fn format_time(lang: Lang, at: NaiveDateTime) -> String {
    match lang {
        // vi-VN renders a 24h clock
        Lang::Vi => at.format("%H:%M:%S").to_string(),
        Lang::En => at.format("%-I:%M:%S %p").to_string(),
    }
}

pub fn format_date(lang: Lang, date: NaiveDate) -> String {
    match lang {
        Lang::Vi => date.format("%d/%m/%Y").to_string(),
        Lang::En => date.format("%m/%d/%Y").to_string(),
    }
}

/// Short day-of-week label for history rows (`CN`/`T2`.. in Vietnamese).
pub fn weekday_label(lang: Lang, weekday: Weekday) -> &'static str {
    match lang {
        Lang::Vi => match weekday {
            Weekday::Sun => "CN",
            Weekday::Mon => "T2",
            Weekday::Tue => "T3",
            Weekday::Wed => "T4",
            Weekday::Thu => "T5",
            Weekday::Fri => "T6",
            Weekday::Sat => "T7",
        },
        Lang::En => match weekday {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn vietnamese_formats() {
        assert_eq!(format_time(Lang::Vi, at(14, 5, 9)), "14:05:09");
        assert_eq!(
            format_date(Lang::Vi, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()),
            "06/08/2026"
        );
    }

    #[test]
    fn english_formats() {
        assert_eq!(format_time(Lang::En, at(14, 5, 9)), "2:05:09 PM");
        assert_eq!(
            format_date(Lang::En, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()),
            "08/06/2026"
        );
    }

    #[test]
    fn weekday_labels() {
        assert_eq!(weekday_label(Lang::Vi, Weekday::Sun), "CN");
        assert_eq!(weekday_label(Lang::Vi, Weekday::Mon), "T2");
        assert_eq!(weekday_label(Lang::En, Weekday::Sat), "Sat");
    }
}
