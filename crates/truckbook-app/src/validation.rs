//! Input checks applied before records reach the stores
//!
//! The stores trust their input; front ends call these first.

use chrono::NaiveDate;
use truckbook_types::{Error, NewMonthlyExpense, NewTrip, Result};

use crate::config::Config;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a zero-padded ISO-8601 calendar date (YYYY-MM-DD)
///
/// Padding is required so that stored dates compare correctly as strings.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| Error::InvalidInput(format!("date '{}': {}", value, e)))?;
    if date.format(DATE_FORMAT).to_string() != value {
        return Err(Error::InvalidInput(format!(
            "date '{}' must be written as YYYY-MM-DD",
            value
        )));
    }
    Ok(date)
}

/// Check both ends of a date range
pub fn validate_date_range(start: &str, end: &str) -> Result<()> {
    let from = parse_date(start)?;
    let to = parse_date(end)?;
    if from > to {
        return Err(Error::InvalidInput(format!(
            "date range starts after it ends: {} > {}",
            start, end
        )));
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

fn require_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Month label as a number 1-12
pub fn parse_month(label: &str) -> Result<u32> {
    match label.trim().parse::<u32>() {
        Ok(m) if (1..=12).contains(&m) => Ok(m),
        _ => Err(Error::InvalidInput(format!(
            "month must be 1-12, got '{}'",
            label
        ))),
    }
}

pub fn validate_trip(trip: &NewTrip) -> Result<()> {
    require_text("truck number", &trip.truck_number)?;
    require_text("driver name", &trip.driver_name)?;
    require_text("branch", &trip.branch)?;
    require_text("location", &trip.location)?;
    parse_date(&trip.date)?;
    require_amount("kilometers", trip.kilometers)?;
    require_amount("fuel cost", trip.fuel_cost)?;
    require_amount("other expenses", trip.other_expenses)?;
    require_amount("total revenue", trip.total_revenue)?;
    Ok(())
}

pub fn validate_monthly_expense(expense: &NewMonthlyExpense, config: &Config) -> Result<()> {
    require_text("truck number", &expense.truck_number)?;
    parse_month(&expense.month)?;
    if !config.accepts_year(expense.year) {
        return Err(Error::InvalidInput(format!(
            "year must be between {} and {}, got {}",
            config.year_min, config.year_max, expense.year
        )));
    }
    require_amount("driver salary", expense.driver_salary)?;
    require_amount("maintenance cost", expense.maintenance_cost)?;
    require_amount("other monthly expenses", expense.other_monthly_expenses)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> NewTrip {
        NewTrip {
            truck_number: "T1".to_string(),
            driver_name: "Vijay".to_string(),
            branch: "West".to_string(),
            date: "2024-02-29".to_string(),
            location: "Surat".to_string(),
            kilometers: 0.0,
            fuel_cost: 10.0,
            other_expenses: 0.0,
            total_revenue: 0.0,
        }
    }

    fn expense() -> NewMonthlyExpense {
        NewMonthlyExpense {
            truck_number: "T1".to_string(),
            month: "3".to_string(),
            year: 2024,
            driver_salary: 1000.0,
            maintenance_cost: 200.0,
            other_monthly_expenses: 50.0,
        }
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-3-5").is_err());
        assert!(parse_date("05/03/2024").is_err());
    }

    #[test]
    fn test_validate_date_range() {
        assert!(validate_date_range("2024-01-01", "2024-01-01").is_ok());
        assert!(validate_date_range("2024-02-01", "2024-01-01").is_err());
    }

    #[test]
    fn test_validate_trip() {
        assert!(validate_trip(&trip()).is_ok());

        let mut bad = trip();
        bad.fuel_cost = -1.0;
        assert!(validate_trip(&bad).is_err());

        let mut bad = trip();
        bad.kilometers = f64::NAN;
        assert!(validate_trip(&bad).is_err());

        let mut bad = trip();
        bad.driver_name = "  ".to_string();
        assert!(validate_trip(&bad).is_err());
    }

    #[test]
    fn test_validate_monthly_expense() {
        let config = Config::default();
        assert!(validate_monthly_expense(&expense(), &config).is_ok());

        let mut bad = expense();
        bad.month = "13".to_string();
        assert!(validate_monthly_expense(&bad, &config).is_err());

        let mut bad = expense();
        bad.year = 2031;
        assert!(validate_monthly_expense(&bad, &config).is_err());

        let mut bad = expense();
        bad.maintenance_cost = -0.5;
        assert!(validate_monthly_expense(&bad, &config).is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("1").unwrap(), 1);
        assert_eq!(parse_month(" 12 ").unwrap(), 12);
        assert!(parse_month("0").is_err());
        assert!(parse_month("March").is_err());
    }
}
