//! Presentation fields computed from raw configuration inputs.
//!
//! Pure calculation: the evaluation instant is an explicit argument so
//! results are deterministic under test.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Days per year including the leap-year correction.
const DAYS_PER_YEAR: f64 = 365.25;

/// Fields derived from the display title and registration date.
///
/// All fields are plain strings; an empty string means "not available"
/// and suppresses the corresponding page fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedFields {
    /// Whole registration years rendered as `"<N>+"`.
    pub domain_age_years: String,
    /// Sentence of the form `"Registered in <year>"`.
    pub domain_registration: String,
    /// Suffix of the display title including the dot, e.g. `".io"`.
    pub domain_extension: String,
}

/// Computes the derived presentation fields.
///
/// A missing or unparseable registration date silently yields empty age
/// and registration fields; there is no error path.
#[must_use]
pub fn derive_fields(
    domain_title: &str,
    registration_date: Option<&str>,
    now: DateTime<Utc>,
) -> DerivedFields {
    let domain_extension = extension_of(domain_title);

    let Some(date) = registration_date.and_then(parse_date) else {
        return DerivedFields {
            domain_extension,
            ..DerivedFields::default()
        };
    };

    let days = (now.date_naive() - date).num_days();
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let years = (days as f64 / DAYS_PER_YEAR).floor() as i64;

    DerivedFields {
        domain_age_years: format!("{years}+"),
        domain_registration: format!("Registered in {}", date.year()),
        domain_extension,
    }
}

/// Extension of the display title: `.` plus the last label, unless the
/// title is a dotted-quad IPv4 literal or has a single label.
fn extension_of(domain_title: &str) -> String {
    let labels: Vec<&str> = domain_title.split('.').collect();
    if labels.len() < 2 || is_dotted_quad(&labels) {
        return String::new();
    }
    labels.last().map_or_else(String::new, |l| format!(".{l}"))
}

/// Four all-digit labels, e.g. `127.0.0.1`.
fn is_dotted_quad(labels: &[&str]) -> bool {
    labels.len() == 4
        && labels
            .iter()
            .all(|l| !l.is_empty() && l.bytes().all(|b| b.is_ascii_digit()))
}

/// Accepts a bare ISO date or a full RFC 3339 instant.
fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(year, month, day, 0, 0, 0) {
            chrono::LocalResult::Single(dt) => dt,
            _ => panic!("valid test instant"),
        }
    }

    #[test]
    fn age_and_registration_from_fixed_instant() {
        let fields = derive_fields("cdn-farm.io", Some("2010-01-15"), at(2025, 6, 1));
        assert_eq!(fields.domain_age_years, "15+");
        assert_eq!(fields.domain_registration, "Registered in 2010");
        assert_eq!(fields.domain_extension, ".io");
    }

    #[test]
    fn rfc3339_registration_date_is_accepted() {
        let fields = derive_fields("example.com", Some("2010-01-15T12:30:00Z"), at(2025, 6, 1));
        assert_eq!(fields.domain_registration, "Registered in 2010");
    }

    #[test]
    fn unparseable_date_yields_empty_fields() {
        let fields = derive_fields("example.com", Some("next tuesday"), at(2025, 6, 1));
        assert_eq!(fields.domain_age_years, "");
        assert_eq!(fields.domain_registration, "");
        assert_eq!(fields.domain_extension, ".com");
    }

    #[test]
    fn missing_date_yields_empty_fields() {
        let fields = derive_fields("example.com", None, at(2025, 6, 1));
        assert_eq!(fields.domain_age_years, "");
        assert_eq!(fields.domain_registration, "");
    }

    #[test]
    fn ipv4_literal_has_no_extension() {
        let fields = derive_fields("127.0.0.1", None, at(2025, 6, 1));
        assert_eq!(fields.domain_extension, "");
    }

    #[test]
    fn single_label_has_no_extension() {
        let fields = derive_fields("localhost", None, at(2025, 6, 1));
        assert_eq!(fields.domain_extension, "");
    }

    #[test]
    fn multi_label_extension_is_last_label() {
        let fields = derive_fields("shop.example.co.uk", None, at(2025, 6, 1));
        assert_eq!(fields.domain_extension, ".uk");
    }
}
