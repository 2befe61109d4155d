//! The individual field validators. Each is a pure check producing a
//! default message; `with_message` overrides the default the way a
//! per-field error message would.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9(][0-9 ().-]{5,24}$").expect("phone pattern compiles"));

/// Fails when a required string is empty or whitespace. Typed fields
/// cannot be null, so the empty string is the absent case.
pub fn required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("This field is required.".to_string())
    } else {
        Ok(())
    }
}

/// Fails when the string is longer than `max` characters.
pub fn max_length(max: usize) -> impl Fn(&str) -> Result<(), String> {
    move |value: &str| {
        if value.chars().count() > max {
            Err(format!("This field can have a maximum of {max} characters."))
        } else {
            Ok(())
        }
    }
}

/// Fails unless the first character is an uppercase letter. The empty
/// string fails with its own message so absent and lowercase input stay
/// distinguishable.
pub fn starts_with_uppercase(value: &str) -> Result<(), String> {
    match value.chars().next() {
        None => Err("A valid string is required.".to_string()),
        Some(first) if first.is_uppercase() => Ok(()),
        Some(_) => Err("The first character must be uppercase.".to_string()),
    }
}

/// Fails unless the whole string matches the given anchored pattern.
pub fn pattern(re: &Regex) -> impl Fn(&str) -> Result<(), String> + '_ {
    move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err("The value contains invalid characters.".to_string())
        }
    }
}

/// Conventional email syntax: one `@`, no whitespace, a dot in the domain.
pub fn email(value: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err("Invalid email address.".to_string())
    }
}

/// Conventional phone syntax: optional leading `+`, digits with common
/// separators, at least six characters.
pub fn phone(value: &str) -> Result<(), String> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err("Enter the phone number in the correct format.".to_string())
    }
}

/// Whole years between a birth date and `today`, counting a birthday that
/// falls on `today` as already turned.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Fails when the birth date yields an age below `minimum` as of today's
/// UTC date.
pub fn minimum_age(minimum: i32) -> impl Fn(&NaiveDate) -> Result<(), String> {
    move |birth_date: &NaiveDate| {
        let today = Utc::now().date_naive();
        if age_in_years(*birth_date, today) >= minimum {
            Ok(())
        } else {
            Err(format!("You must be at least {minimum} years old."))
        }
    }
}

/// Fails when the date is earlier than today's UTC date.
pub fn not_in_past(value: &NaiveDate) -> Result<(), String> {
    let today = Utc::now().date_naive();
    if *value < today {
        Err("Date cannot be in the past.".to_string())
    } else {
        Ok(())
    }
}

/// Replaces the message of every failure branch of `rule`, mirroring an
/// error message attached at the field site.
pub fn with_message<T: ?Sized>(
    message: &'static str,
    rule: impl Fn(&T) -> Result<(), String>,
) -> impl Fn(&T) -> Result<(), String> {
    move |value: &T| rule(value).map_err(|_| message.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn required_rejects_empty_and_whitespace() {
        assert!(required("").is_err());
        assert!(required("   ").is_err());
        assert!(required("A").is_ok());
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        let rule = max_length(5);
        assert!(rule("12345").is_ok());
        assert!(rule("123456").is_err());
        assert!(rule("žluťá").is_ok());
    }

    #[test]
    fn starts_with_uppercase_accepts_capitalized_strings() {
        assert!(starts_with_uppercase("Hello").is_ok());
        assert!(starts_with_uppercase("Žluva").is_ok());
    }

    #[test]
    fn starts_with_uppercase_rejects_lowercase_and_digits() {
        assert_eq!(
            starts_with_uppercase("hello").unwrap_err(),
            "The first character must be uppercase."
        );
        assert!(starts_with_uppercase("1abc").is_err());
    }

    #[test]
    fn starts_with_uppercase_rejects_empty_with_distinct_message() {
        assert_eq!(
            starts_with_uppercase("").unwrap_err(),
            "A valid string is required."
        );
    }

    #[test]
    fn email_accepts_conventional_addresses() {
        assert!(email("anna@example.com").is_ok());
        assert!(email("first.last@mail.example.co.uk").is_ok());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(email("not-an-email").is_err());
        assert!(email("a b@example.com").is_err());
        assert!(email("user@host").is_err());
        assert!(email("@example.com").is_err());
    }

    #[test]
    fn phone_accepts_common_formats() {
        assert!(phone("+420 123 456 789").is_ok());
        assert!(phone("123456").is_ok());
        assert!(phone("(555) 123-4567").is_ok());
    }

    #[test]
    fn phone_rejects_letters_and_short_numbers() {
        assert!(phone("call me").is_err());
        assert!(phone("12345").is_err());
        assert!(phone("").is_err());
    }

    #[test]
    fn age_counts_whole_years() {
        assert_eq!(age_in_years(date(2000, 5, 10), date(2018, 5, 10)), 18);
        assert_eq!(age_in_years(date(2000, 5, 10), date(2018, 5, 9)), 17);
        assert_eq!(age_in_years(date(2000, 5, 10), date(2018, 6, 1)), 18);
    }

    #[test]
    fn age_handles_leap_day_birthdays() {
        // Born Feb 29: in a non-leap year the birthday has not occurred
        // on Feb 28 but has by Mar 1.
        assert_eq!(age_in_years(date(2008, 2, 29), date(2026, 2, 28)), 17);
        assert_eq!(age_in_years(date(2008, 2, 29), date(2026, 3, 1)), 18);
    }

    #[test]
    fn minimum_age_boundary_counts_todays_birthday() {
        let today = Utc::now().date_naive();
        let rule = minimum_age(18);

        let exactly_18 = today
            .with_year(today.year() - 18)
            .unwrap_or_else(|| date(today.year() - 18, 2, 28));
        assert!(rule(&exactly_18).is_ok());

        let just_17 = today
            .with_year(today.year() - 17)
            .unwrap_or_else(|| date(today.year() - 17, 2, 28));
        assert_eq!(
            rule(&just_17).unwrap_err(),
            "You must be at least 18 years old."
        );
    }

    #[test]
    fn not_in_past_allows_today_and_later() {
        let today = Utc::now().date_naive();
        assert!(not_in_past(&today).is_ok());
        assert!(not_in_past(&today.checked_add_days(Days::new(1)).unwrap()).is_ok());
        assert!(not_in_past(&today.checked_sub_days(Days::new(1)).unwrap()).is_err());
    }

    #[test]
    fn pattern_requires_a_full_match() {
        let letters = Regex::new(r"^[a-z]+$").unwrap();
        let rule = pattern(&letters);
        assert!(rule("abc").is_ok());
        assert!(rule("abc1").is_err());
    }

    #[test]
    fn with_message_overrides_every_failure_branch() {
        let rule = with_message("Title must start with an uppercase letter.", starts_with_uppercase);
        assert_eq!(
            rule("lower").unwrap_err(),
            "Title must start with an uppercase letter."
        );
        assert_eq!(
            rule("").unwrap_err(),
            "Title must start with an uppercase letter."
        );
        assert!(rule("Upper").is_ok());
    }
}
