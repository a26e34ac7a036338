//! Date helpers shared by the filter controls and chart axes.

use time::{macros::format_description, Date};

/// `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn format_input_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Parses an `<input type="date">` value; `None` for empty or partial input.
pub fn parse_input_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), &format_description!("[year]-[month]-[day]")).ok()
}

/// Compact axis label: `01.07`.
pub fn format_axis_date(date: Date) -> String {
    date.format(&format_description!("[day].[month]"))
        .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn input_dates_round_trip() {
        let day = date!(2024 - 07 - 01);
        assert_eq!(format_input_date(day), "2024-07-01");
        assert_eq!(parse_input_date("2024-07-01"), Some(day));
    }

    #[test]
    fn partial_input_is_rejected() {
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("2024-07"), None);
        assert_eq!(parse_input_date("2024-02-30"), None);
    }

    #[test]
    fn axis_labels_are_day_first() {
        assert_eq!(format_axis_date(date!(2024 - 11 - 30)), "30.11");
    }
}
