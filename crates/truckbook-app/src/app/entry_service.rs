//! Entry Service - validated record creation
//!
//! Front ends go through here so that only checked input reaches the stores.

use tracing::info;
use truckbook_store::{MonthlyExpenseStore, TripStore};
use truckbook_types::{MonthlyExpenseRecord, NewMonthlyExpense, NewTrip, Result, TripRecord};

use crate::config::Config;
use crate::validation::{validate_monthly_expense, validate_trip};

/// Validate and record a trip
pub fn add_trip(store: &mut TripStore, input: NewTrip) -> Result<TripRecord> {
    validate_trip(&input)?;
    let trip = store.add(input);
    info!(id = %trip.id, truck = %trip.truck_number, profit = trip.profit, "trip recorded");
    Ok(trip)
}

/// Validate and record a monthly expense
pub fn add_monthly_expense(
    store: &mut MonthlyExpenseStore,
    input: NewMonthlyExpense,
    config: &Config,
) -> Result<MonthlyExpenseRecord> {
    validate_monthly_expense(&input, config)?;
    let expense = store.add(input);
    info!(
        id = %expense.id,
        truck = %expense.truck_number,
        total = expense.total_monthly_expense,
        "monthly expense recorded"
    );
    Ok(expense)
}
