use chrono::{Datelike, NaiveDate};

pub const MIN_ORGAN_DONOR_AGE: i32 = 20;

pub const MISSING_FIELDS: &str = "All fields are required";
pub const INVALID_DOB: &str = "Please provide a valid date of birth (YYYY-MM-DD)";
pub const UNDERAGE_ORGAN_DONOR: &str = "Must be 20+ to donate organ";

const LOW_RATING_THRESHOLD: f64 = 3.0;

/// Point-in-time answer to "is there any donor for this blood group".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    CurrentlyNotAvailable,
}

impl Availability {
    pub fn from_count(donors: i64) -> Self {
        if donors > 0 {
            Availability::Available
        } else {
            Availability::CurrentlyNotAvailable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::CurrentlyNotAvailable => "Currently Not Available",
        }
    }
}

/// Which feedback confirmation page a submission gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Low,
    Standard,
}

impl FeedbackTone {
    /// Ratings that parse to a number at or below 3 are low; anything else is standard.
    pub fn from_rating(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value <= LOW_RATING_THRESHOLD => FeedbackTone::Low,
            _ => FeedbackTone::Standard,
        }
    }

    pub fn is_low(self) -> bool {
        self == FeedbackTone::Low
    }
}

pub fn all_present(fields: &[&str]) -> bool {
    fields.iter().all(|field| !field.trim().is_empty())
}

pub fn parse_dob(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Year difference only; a birthday later this year still counts as a full year.
pub fn age_in_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - dob.year()
}

pub fn is_eligible_organ_donor(dob: NaiveDate, today: NaiveDate) -> bool {
    age_in_years(dob, today) >= MIN_ORGAN_DONOR_AGE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn availability_follows_count() {
        assert_eq!(Availability::from_count(0), Availability::CurrentlyNotAvailable);
        assert_eq!(Availability::from_count(3), Availability::Available);
        assert_eq!(Availability::Available.label(), "Available");
        assert_eq!(
            Availability::CurrentlyNotAvailable.label(),
            "Currently Not Available"
        );
    }

    #[test]
    fn feedback_rating_threshold() {
        assert_eq!(FeedbackTone::from_rating("1"), FeedbackTone::Low);
        assert_eq!(FeedbackTone::from_rating("3"), FeedbackTone::Low);
        assert_eq!(FeedbackTone::from_rating(" 2.5 "), FeedbackTone::Low);
        assert_eq!(FeedbackTone::from_rating("4"), FeedbackTone::Standard);
        assert_eq!(FeedbackTone::from_rating("5"), FeedbackTone::Standard);
        assert_eq!(FeedbackTone::from_rating("great"), FeedbackTone::Standard);
    }

    #[test]
    fn presence_check_trims() {
        assert!(all_present(&["a", "b"]));
        assert!(!all_present(&["a", "   "]));
        assert!(!all_present(&["", "b"]));
    }

    #[test]
    fn parses_html_date_input() {
        assert_eq!(parse_dob("1990-04-12"), Some(date(1990, 4, 12)));
        assert_eq!(parse_dob("12/04/1990"), None);
        assert_eq!(parse_dob(""), None);
    }

    #[test]
    fn organ_age_uses_year_arithmetic() {
        let today = date(2025, 3, 1);
        assert!(is_eligible_organ_donor(date(2005, 1, 1), today));
        // birthday not reached yet this year, still counted as 20
        assert!(is_eligible_organ_donor(date(2005, 12, 31), today));
        assert!(!is_eligible_organ_donor(date(2006, 1, 1), today));
        assert_eq!(age_in_years(date(2006, 1, 1), today), 19);
    }
}
