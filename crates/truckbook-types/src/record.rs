//! Persisted record types
//!
//! Records are built only from their input types so the derived fields
//! (`total_cost`, `profit`, `total_monthly_expense`) always agree with the
//! amounts they are computed from.

use serde::{Deserialize, Serialize};

/// A single trip made by a truck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    /// Store-assigned identifier
    pub id: String,
    /// Truck number (e.g., "T1", "KA-01-1234")
    pub truck_number: String,
    pub driver_name: String,
    pub branch: String,
    /// ISO-8601 calendar date ("2024-03-15")
    pub date: String,
    pub location: String,
    pub kilometers: f64,
    pub fuel_cost: f64,
    pub other_expenses: f64,
    pub total_revenue: f64,
    /// fuel_cost + other_expenses
    pub total_cost: f64,
    /// total_revenue - total_cost
    pub profit: f64,
}

/// Trip data as entered, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub truck_number: String,
    pub driver_name: String,
    pub branch: String,
    pub date: String,
    pub location: String,
    pub kilometers: f64,
    pub fuel_cost: f64,
    pub other_expenses: f64,
    pub total_revenue: f64,
}

impl TripRecord {
    /// Build a record from validated input, computing cost and profit
    pub fn from_input(id: String, input: NewTrip) -> Self {
        let total_cost = input.fuel_cost + input.other_expenses;
        let profit = input.total_revenue - total_cost;

        Self {
            id,
            truck_number: input.truck_number,
            driver_name: input.driver_name,
            branch: input.branch,
            date: input.date,
            location: input.location,
            kilometers: input.kilometers,
            fuel_cost: input.fuel_cost,
            other_expenses: input.other_expenses,
            total_revenue: input.total_revenue,
            total_cost,
            profit,
        }
    }
}

/// Fixed monthly costs for one truck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenseRecord {
    pub id: String,
    pub truck_number: String,
    /// Month label, normally "1".."12"
    pub month: String,
    pub year: i32,
    pub driver_salary: f64,
    pub maintenance_cost: f64,
    pub other_monthly_expenses: f64,
    /// driver_salary + maintenance_cost + other_monthly_expenses
    pub total_monthly_expense: f64,
}

/// Monthly expense data as entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMonthlyExpense {
    pub truck_number: String,
    pub month: String,
    pub year: i32,
    pub driver_salary: f64,
    pub maintenance_cost: f64,
    pub other_monthly_expenses: f64,
}

const MONTH_NAMES: [&str; 12] = [
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

impl MonthlyExpenseRecord {
    /// Build a record from validated input, computing the monthly total
    pub fn from_input(id: String, input: NewMonthlyExpense) -> Self {
        let total_monthly_expense =
            input.driver_salary + input.maintenance_cost + input.other_monthly_expenses;

        Self {
            id,
            truck_number: input.truck_number,
            month: input.month,
            year: input.year,
            driver_salary: input.driver_salary,
            maintenance_cost: input.maintenance_cost,
            other_monthly_expenses: input.other_monthly_expenses,
            total_monthly_expense,
        }
    }

    /// English month name for numeric labels, the raw label otherwise
    pub fn month_name(&self) -> &str {
        match self.month.trim().parse::<usize>() {
            Ok(m @ 1..=12) => MONTH_NAMES[m - 1],
            _ => &self.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trip() -> NewTrip {
        NewTrip {
            truck_number: "T1".to_string(),
            driver_name: "Ravi".to_string(),
            branch: "North".to_string(),
            date: "2024-03-15".to_string(),
            location: "Pune".to_string(),
            kilometers: 100.0,
            fuel_cost: 20.0,
            other_expenses: 5.0,
            total_revenue: 200.0,
        }
    }

    fn sample_expense(month: &str) -> MonthlyExpenseRecord {
        MonthlyExpenseRecord::from_input(
            "e1".to_string(),
            NewMonthlyExpense {
                truck_number: "T1".to_string(),
                month: month.to_string(),
                year: 2024,
                driver_salary: 1000.0,
                maintenance_cost: 200.0,
                other_monthly_expenses: 50.0,
            },
        )
    }

    #[test]
    fn test_trip_derived_fields() {
        let trip = TripRecord::from_input("a".to_string(), sample_trip());
        assert_eq!(trip.total_cost, 25.0);
        assert_eq!(trip.profit, 175.0);
        assert_eq!(trip.id, "a");
    }

    #[test]
    fn test_trip_profit_can_be_negative() {
        let mut input = sample_trip();
        input.total_revenue = 10.0;
        let trip = TripRecord::from_input("a".to_string(), input);
        assert_eq!(trip.profit, -15.0);
    }

    #[test]
    fn test_monthly_total() {
        let expense = sample_expense("3");
        assert_eq!(expense.total_monthly_expense, 1250.0);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(sample_expense("3").month_name(), "March");
        assert_eq!(sample_expense("12").month_name(), "December");
        assert_eq!(sample_expense("0").month_name(), "0");
        assert_eq!(sample_expense("13").month_name(), "13");
        assert_eq!(sample_expense("Diwali").month_name(), "Diwali");
    }

    #[test]
    fn test_camel_case_field_names() {
        let trip = TripRecord::from_input("a".to_string(), sample_trip());
        let value = serde_json::to_value(&trip).unwrap();
        for key in [
            "id",
            "truckNumber",
            "driverName",
            "branch",
            "date",
            "location",
            "kilometers",
            "fuelCost",
            "otherExpenses",
            "totalRevenue",
            "totalCost",
            "profit",
        ] {
            assert!(value.get(key).is_some(), "missing field {}", key);
        }

        let value = serde_json::to_value(sample_expense("3")).unwrap();
        assert_eq!(value["otherMonthlyExpenses"], 50.0);
        assert_eq!(value["totalMonthlyExpense"], 1250.0);
        assert_eq!(value["month"], "3");
    }
}
