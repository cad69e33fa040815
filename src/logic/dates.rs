// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Log date parsing and formatting.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Month names in calendar order, for the month drop-down.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Turn the log date fields into a calendar date.
///
/// `month` is 1-based and always valid since it comes from a drop-down; `day` and `year` are
/// free text.
///
/// # Errors
///
/// - [`ValidationError::BlankDate`] when the day or year is blank.
/// - [`ValidationError::InvalidDay`] when the day is not a number from 1 to 31.
/// - [`ValidationError::InvalidYear`] when the year is not four digits.
/// - [`ValidationError::NonexistentDate`] for dates such as February 30.
pub fn parse_log_date(month: u32, day: &str, year: &str) -> Result<NaiveDate, ValidationError> {
    let day = day.trim();
    let year = year.trim();
    if day.is_empty() || year.is_empty() {
        return Err(ValidationError::BlankDate);
    }

    let day: u32 = day.parse().map_err(|_| ValidationError::InvalidDay)?;
    if !(1..=31).contains(&day) {
        return Err(ValidationError::InvalidDay);
    }

    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidYear);
    }
    let year: i32 = year.parse().map_err(|_| ValidationError::InvalidYear)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::NonexistentDate)
}

/// Long form used in titles and messages, e.g. `June 12, 2020`.
pub fn long_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_date() {
        assert_eq!(
            parse_log_date(4, "12", "2020"),
            Ok(NaiveDate::from_ymd_opt(2020, 4, 12).unwrap())
        );
        assert_eq!(
            parse_log_date(2, " 29 ", "2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            parse_log_date(1, "", "2020"),
            Err(ValidationError::BlankDate)
        );
        assert_eq!(
            parse_log_date(1, "3", "  "),
            Err(ValidationError::BlankDate)
        );
    }

    #[test]
    fn day_must_be_in_month_range() {
        assert_eq!(
            parse_log_date(1, "0", "2020"),
            Err(ValidationError::InvalidDay)
        );
        assert_eq!(
            parse_log_date(1, "32", "2020"),
            Err(ValidationError::InvalidDay)
        );
        assert_eq!(
            parse_log_date(1, "x", "2020"),
            Err(ValidationError::InvalidDay)
        );
    }

    #[test]
    fn year_must_have_four_digits() {
        assert_eq!(
            parse_log_date(1, "1", "20"),
            Err(ValidationError::InvalidYear)
        );
        assert_eq!(
            parse_log_date(1, "1", "20201"),
            Err(ValidationError::InvalidYear)
        );
        assert_eq!(
            parse_log_date(1, "1", "-202"),
            Err(ValidationError::InvalidYear)
        );
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert_eq!(
            parse_log_date(2, "30", "2020"),
            Err(ValidationError::NonexistentDate)
        );
        assert_eq!(
            parse_log_date(2, "29", "2021"),
            Err(ValidationError::NonexistentDate)
        );
        assert_eq!(
            parse_log_date(4, "31", "2020"),
            Err(ValidationError::NonexistentDate)
        );
    }

    #[test]
    fn long_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 2).unwrap();
        assert_eq!(long_date(&date), "June 2, 2020");
    }
}
