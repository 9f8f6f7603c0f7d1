use crate::utils::error::{CourierError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CourierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects ranges whose end precedes their start. Equal dates are a valid
/// single-day range.
pub fn validate_date_order(field_name: &str, start: NaiveDate, end: NaiveDate) -> Result<()> {
    if end < start {
        return Err(CourierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} .. {}", start, end),
            reason: "End date must not precede start date".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("sort_key", "Date").is_ok());
        assert!(validate_non_empty_string("sort_key", "").is_err());
        assert!(validate_non_empty_string("sort_key", "   ").is_err());
    }

    #[test]
    fn test_validate_date_order() {
        assert!(validate_date_order("date_range", date(2023, 1, 1), date(2023, 12, 31)).is_ok());
        assert!(validate_date_order("date_range", date(2023, 5, 5), date(2023, 5, 5)).is_ok());

        let err = validate_date_order("date_range", date(2023, 12, 31), date(2023, 1, 1))
            .unwrap_err();
        assert!(matches!(
            err,
            CourierError::InvalidConfigValueError { ref field, .. } if field == "date_range"
        ));
    }
}
