use crate::models::AgeBand;
use chrono::{Datelike, Local, NaiveDate};

pub struct AgeBandClassifier;

impl AgeBandClassifier {
    pub fn classify(dob: &str) -> AgeBand {
        let today = Local::now().naive_local().date();
        Self::classify_at(dob, today)
    }

    /// Age is the difference in calendar years, so someone whose birthday
    /// has not yet come round this year is counted one year older.
    pub fn classify_at(dob: &str, today: NaiveDate) -> AgeBand {
        let Some(birth) = Self::parse_date(dob) else {
            return AgeBand::NotAvailable;
        };

        let age = today.year() - birth.year();
        if age < 18 {
            AgeBand::Underage
        } else if age <= 30 {
            AgeBand::TwentyToThirty
        } else if age <= 50 {
            AgeBand::ThirtyToFifty
        } else {
            AgeBand::Senior
        }
    }

    // Parse a date string in the format "DD/MM/YYYY"
    fn parse_date(date_str: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(date_str.trim(), "%d/%m/%Y").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 6, 1).unwrap()
    }

    #[test]
    fn test_bands() {
        assert_eq!(AgeBandClassifier::classify_at("15/03/1985", on(2026)), AgeBand::ThirtyToFifty);
        assert_eq!(AgeBandClassifier::classify_at("15/03/2008", on(2026)), AgeBand::TwentyToThirty);
        assert_eq!(AgeBandClassifier::classify_at("15/03/1996", on(2026)), AgeBand::TwentyToThirty);
        assert_eq!(AgeBandClassifier::classify_at("15/03/2009", on(2026)), AgeBand::Underage);
        assert_eq!(AgeBandClassifier::classify_at("15/03/1976", on(2026)), AgeBand::ThirtyToFifty);
        assert_eq!(AgeBandClassifier::classify_at("15/03/1975", on(2026)), AgeBand::Senior);
    }

    #[test]
    fn test_calendar_year_difference() {
        // Turns 18 only in December, still counted as 18
        let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        assert_eq!(AgeBandClassifier::classify_at("31/12/2008", today), AgeBand::TwentyToThirty);
    }

    #[test]
    fn test_unparseable_dob() {
        assert_eq!(AgeBandClassifier::classify_at("", on(2026)), AgeBand::NotAvailable);
        assert_eq!(AgeBandClassifier::classify_at("1985", on(2026)), AgeBand::NotAvailable);
        assert_eq!(AgeBandClassifier::classify_at("31/02/1985", on(2026)), AgeBand::NotAvailable);
        assert_eq!(AgeBandClassifier::classify("not a date"), AgeBand::NotAvailable);
    }
}
