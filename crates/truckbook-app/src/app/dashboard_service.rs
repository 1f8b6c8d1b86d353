//! Dashboard Service - Fleet Overview
//!
//! Reads both stores and folds their current snapshots into:
//! - fleet-wide totals and net profit
//! - one row per truck with its monthly expenses and net profit
//! - one summary per branch
//!
//! Nothing is cached; every call recomputes from the full collections.

use serde::Serialize;
use truckbook_domain::service::{
    fold_branch_summary, monthly_expense_total_for_truck, net_profit, overall_totals,
    truck_summaries,
};
use truckbook_store::{MonthlyExpenseStore, TripStore};
use truckbook_types::{BranchSummary, FleetTotals, TruckSummary};

/// Per-truck line of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckProfitRow {
    #[serde(flatten)]
    pub summary: TruckSummary,
    /// Monthly expenses recorded for exactly this truck number
    pub monthly_expenses: f64,
    pub net_profit: f64,
}

/// Complete dashboard snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub totals: FleetTotals,
    pub net_profit: f64,
    pub trucks: Vec<TruckProfitRow>,
    pub branches: Vec<BranchSummary>,
}

/// Build the dashboard from the current store contents
pub fn build_dashboard(trips: &TripStore, monthly_expenses: &MonthlyExpenseStore) -> DashboardReport {
    let all_trips = trips.all();
    let all_expenses = monthly_expenses.all();

    let totals = overall_totals(all_trips, all_expenses);

    let trucks = truck_summaries(all_trips)
        .into_iter()
        .map(|summary| {
            let expenses = monthly_expense_total_for_truck(all_expenses, &summary.truck_number);
            TruckProfitRow {
                net_profit: net_profit(&summary, expenses),
                monthly_expenses: expenses,
                summary,
            }
        })
        .collect();

    let branches = trips
        .distinct_branches()
        .iter()
        .map(|branch| {
            fold_branch_summary(branch, all_trips.iter().filter(|t| &t.branch == branch))
        })
        .collect();

    DashboardReport {
        net_profit: totals.net_profit(),
        totals,
        trucks,
        branches,
    }
}
