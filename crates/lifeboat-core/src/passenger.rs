//! Passenger attributes collected from the booking form.
//!
//! [`PassengerForm`] is the raw wire shape: every field optional, every value a
//! string, exactly as an `application/x-www-form-urlencoded` body delivers them.
//! [`PassengerForm::parse`] turns it into a validated [`Passenger`]. Missing
//! `age`/`fare` fall back to fixed defaults; any other missing field and any
//! malformed value is an error.

use serde::Deserialize;
use thiserror::Error;

/// Fallback when the form omits `age`.
pub const DEFAULT_AGE: f64 = 29.7;

/// Fallback when the form omits `fare`.
pub const DEFAULT_FARE: f64 = 14.45;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing form field '{0}'")]
    Missing(&'static str),

    #[error("field '{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("passenger class must be 1, 2 or 3, got '{0}'")]
    InvalidClass(String),

    #[error("sex must be 'male' or 'female', got '{0}'")]
    InvalidSex(String),

    #[error("embarkation port must be 'S', 'C' or 'Q', got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(ParseError::InvalidSex(other.to_string())),
        }
    }
}

/// Port of embarkation, by the single-letter codes used in the passenger
/// manifest data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    Southampton,
    Cherbourg,
    Queenstown,
}

impl Port {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Southampton => "S",
            Self::Cherbourg => "C",
            Self::Queenstown => "Q",
        }
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "S" => Ok(Self::Southampton),
            "C" => Ok(Self::Cherbourg),
            "Q" => Ok(Self::Queenstown),
            other => Err(ParseError::InvalidPort(other.to_string())),
        }
    }
}

/// Validated passenger attributes, one per prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    /// Ticket class, 1 (first) through 3 (third).
    pub class: u8,
    pub sex: Sex,
    pub age: f64,
    pub siblings_spouses: u32,
    pub parents_children: u32,
    pub fare: f64,
    pub embarked: Port,
}

/// Raw form fields as posted by the browser.
///
/// Every field is optional so that a missing required field surfaces as a
/// [`ParseError`] through the normal per-request error path rather than a
/// framework-level rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassengerForm {
    pub pclass: Option<String>,
    pub sex: Option<String>,
    pub age: Option<String>,
    pub sibsp: Option<String>,
    pub parch: Option<String>,
    pub fare: Option<String>,
    pub embarked: Option<String>,
}

impl PassengerForm {
    /// Validate and type the raw fields.
    ///
    /// `pclass`, `sex`, `sibsp`, `parch` and `embarked` must be present and
    /// well-formed. `age` and `fare` default to [`DEFAULT_AGE`] and
    /// [`DEFAULT_FARE`] when absent but still fail when present and
    /// non-numeric; an empty string counts as present.
    pub fn parse(&self) -> Result<Passenger, ParseError> {
        let class_raw = required("pclass", self.pclass.as_deref())?;
        let class: u8 = parse_number("pclass", class_raw)?;
        if !(1..=3).contains(&class) {
            return Err(ParseError::InvalidClass(class_raw.to_string()));
        }

        let sex = Sex::parse(required("sex", self.sex.as_deref())?)?;
        let embarked = Port::parse(required("embarked", self.embarked.as_deref())?)?;

        let siblings_spouses = parse_number("sibsp", required("sibsp", self.sibsp.as_deref())?)?;
        let parents_children = parse_number("parch", required("parch", self.parch.as_deref())?)?;

        let age = parse_or_default("age", self.age.as_deref(), DEFAULT_AGE)?;
        let fare = parse_or_default("fare", self.fare.as_deref(), DEFAULT_FARE)?;

        Ok(Passenger {
            class,
            sex,
            age,
            siblings_spouses,
            parents_children,
            fare,
            embarked,
        })
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ParseError> {
    value.ok_or(ParseError::Missing(field))
}

fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, ParseError> {
    raw.trim().parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

fn parse_or_default(
    field: &'static str,
    raw: Option<&str>,
    default: f64,
) -> Result<f64, ParseError> {
    match raw {
        None => Ok(default),
        Some(value) => parse_number(field, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> PassengerForm {
        PassengerForm {
            pclass: Some("1".into()),
            sex: Some("female".into()),
            age: Some("29".into()),
            sibsp: Some("0".into()),
            parch: Some("0".into()),
            fare: Some("100".into()),
            embarked: Some("S".into()),
        }
    }

    #[test]
    fn parse_valid_form() {
        let p = full_form().parse().unwrap();
        assert_eq!(p.class, 1);
        assert_eq!(p.sex, Sex::Female);
        assert_eq!(p.age, 29.0);
        assert_eq!(p.siblings_spouses, 0);
        assert_eq!(p.parents_children, 0);
        assert_eq!(p.fare, 100.0);
        assert_eq!(p.embarked, Port::Southampton);
    }

    #[test]
    fn missing_age_uses_default() {
        let mut form = full_form();
        form.age = None;
        let p = form.parse().unwrap();
        assert_eq!(p.age, DEFAULT_AGE);
    }

    #[test]
    fn missing_fare_uses_default() {
        let mut form = full_form();
        form.fare = None;
        let p = form.parse().unwrap();
        assert_eq!(p.fare, DEFAULT_FARE);
    }

    #[test]
    fn non_numeric_age_is_an_error_even_though_absence_is_not() {
        let mut form = full_form();
        form.age = Some("abc".into());
        let err = form.parse().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                field: "age",
                value: "abc".into()
            }
        );
    }

    #[test]
    fn empty_age_counts_as_present_and_malformed() {
        let mut form = full_form();
        form.age = Some(String::new());
        assert!(matches!(
            form.parse(),
            Err(ParseError::InvalidNumber { field: "age", .. })
        ));
    }

    #[test]
    fn missing_pclass_is_an_error() {
        let mut form = full_form();
        form.pclass = None;
        assert_eq!(form.parse().unwrap_err(), ParseError::Missing("pclass"));
    }

    #[test]
    fn class_out_of_range_is_rejected() {
        let mut form = full_form();
        form.pclass = Some("4".into());
        assert_eq!(
            form.parse().unwrap_err(),
            ParseError::InvalidClass("4".into())
        );
    }

    #[test]
    fn negative_sibling_count_is_rejected() {
        let mut form = full_form();
        form.sibsp = Some("-1".into());
        assert!(matches!(
            form.parse(),
            Err(ParseError::InvalidNumber { field: "sibsp", .. })
        ));
    }

    #[test]
    fn unknown_sex_is_rejected() {
        let mut form = full_form();
        form.sex = Some("other".into());
        assert_eq!(form.parse().unwrap_err(), ParseError::InvalidSex("other".into()));
    }

    #[test]
    fn unknown_port_is_rejected() {
        let mut form = full_form();
        form.embarked = Some("X".into());
        assert_eq!(form.parse().unwrap_err(), ParseError::InvalidPort("X".into()));
    }

    #[test]
    fn numeric_fields_tolerate_whitespace() {
        let mut form = full_form();
        form.age = Some(" 42.5 ".into());
        assert_eq!(form.parse().unwrap().age, 42.5);
    }

    #[test]
    fn parse_error_messages_name_the_field() {
        let mut form = full_form();
        form.fare = Some("lots".into());
        let err = form.parse().unwrap_err();
        assert_eq!(err.to_string(), "field 'fare' is not a valid number: 'lots'");
    }
}
