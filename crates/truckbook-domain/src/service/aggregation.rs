//! Aggregation of trip and monthly-expense collections
//!
//! Every function here is a pure fold over the records it is handed. Nothing
//! is cached: callers re-run the fold whenever they need fresh numbers.

use std::collections::HashSet;

use truckbook_types::{
    BranchSummary, FleetTotals, MonthlyExpenseRecord, TripRecord, TruckSummary,
};

/// Running sums shared by the truck, branch and fleet folds
#[derive(Debug, Clone, Copy, Default)]
struct TripTotals {
    trips: usize,
    kilometers: f64,
    revenue: f64,
    cost: f64,
    profit: f64,
}

impl TripTotals {
    fn add(mut self, trip: &TripRecord) -> Self {
        self.trips += 1;
        self.kilometers += trip.kilometers;
        self.revenue += trip.total_revenue;
        self.cost += trip.total_cost;
        self.profit += trip.profit;
        self
    }

    fn average_profit_per_km(&self) -> f64 {
        if self.kilometers > 0.0 {
            self.profit / self.kilometers
        } else {
            0.0
        }
    }
}

fn distinct_truck_count<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a TripRecord>,
{
    records
        .into_iter()
        .map(|t| t.truck_number.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Fold trips into a summary labelled with `truck_number`
///
/// The label is taken as given; the records are not filtered here.
pub fn fold_truck_summary<'a, I>(truck_number: &str, records: I) -> TruckSummary
where
    I: IntoIterator<Item = &'a TripRecord>,
{
    let totals = records.into_iter().fold(TripTotals::default(), TripTotals::add);

    TruckSummary {
        truck_number: truck_number.to_string(),
        total_trips: totals.trips,
        total_kilometers: totals.kilometers,
        total_revenue: totals.revenue,
        total_cost: totals.cost,
        total_profit: totals.profit,
        average_profit_per_km: totals.average_profit_per_km(),
    }
}

/// Fold trips into a branch summary, counting distinct trucks
pub fn fold_branch_summary<'a, I>(branch: &str, records: I) -> BranchSummary
where
    I: IntoIterator<Item = &'a TripRecord>,
    I::IntoIter: Clone,
{
    let iter = records.into_iter();
    let total_trucks = distinct_truck_count(iter.clone());
    let totals = iter.fold(TripTotals::default(), TripTotals::add);

    BranchSummary {
        branch: branch.to_string(),
        total_trucks,
        total_trips: totals.trips,
        total_kilometers: totals.kilometers,
        total_revenue: totals.revenue,
        total_cost: totals.cost,
        total_profit: totals.profit,
        average_profit_per_km: totals.average_profit_per_km(),
    }
}

/// Trip profit less the monthly expenses attributed to the same truck
pub fn net_profit(summary: &TruckSummary, monthly_expense_total: f64) -> f64 {
    summary.total_profit - monthly_expense_total
}

/// Sum of `total_monthly_expense` over all given records
pub fn monthly_expense_total<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a MonthlyExpenseRecord>,
{
    records.into_iter().map(|e| e.total_monthly_expense).sum()
}

/// Sum of monthly expenses whose truck number equals `truck_number` exactly
pub fn monthly_expense_total_for_truck(
    records: &[MonthlyExpenseRecord],
    truck_number: &str,
) -> f64 {
    monthly_expense_total(records.iter().filter(|e| e.truck_number == truck_number))
}

/// One summary per distinct truck number, in order of first appearance
///
/// Grouping uses exact truck-number equality, unlike the store's
/// substring-based `summary_for_truck`.
pub fn truck_summaries(trips: &[TripRecord]) -> Vec<TruckSummary> {
    let mut seen = HashSet::new();
    let numbers: Vec<&str> = trips
        .iter()
        .map(|t| t.truck_number.as_str())
        .filter(|n| seen.insert(*n))
        .collect();

    numbers
        .into_iter()
        .map(|number| {
            fold_truck_summary(number, trips.iter().filter(|t| t.truck_number == number))
        })
        .collect()
}

/// Fleet-wide totals over the complete trip and monthly-expense collections
pub fn overall_totals(trips: &[TripRecord], monthly_expenses: &[MonthlyExpenseRecord]) -> FleetTotals {
    let totals = trips.iter().fold(TripTotals::default(), TripTotals::add);

    FleetTotals {
        total_trucks: distinct_truck_count(trips),
        total_trips: totals.trips,
        total_kilometers: totals.kilometers,
        total_revenue: totals.revenue,
        total_cost: totals.cost,
        total_profit: totals.profit,
        total_monthly_expenses: monthly_expense_total(monthly_expenses),
    }
}
