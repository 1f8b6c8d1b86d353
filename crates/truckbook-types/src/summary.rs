//! Derived summary types (never persisted)

use serde::{Deserialize, Serialize};

/// Trip totals for one truck number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckSummary {
    pub truck_number: String,
    pub total_trips: usize,
    pub total_kilometers: f64,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    /// total_profit / total_kilometers, 0 when no kilometers were driven
    pub average_profit_per_km: f64,
}

/// Trip totals for one branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchSummary {
    pub branch: String,
    /// Distinct truck numbers seen in the branch
    pub total_trucks: usize,
    pub total_trips: usize,
    pub total_kilometers: f64,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    pub average_profit_per_km: f64,
}

/// Fleet-wide totals shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetTotals {
    pub total_trucks: usize,
    pub total_trips: usize,
    pub total_kilometers: f64,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    pub total_monthly_expenses: f64,
}

impl FleetTotals {
    /// Trip profit minus all monthly expenses (may be negative)
    pub fn net_profit(&self) -> f64 {
        self.total_profit - self.total_monthly_expenses
    }
}
