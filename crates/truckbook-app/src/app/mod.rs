//! Application services

pub mod dashboard_service;
pub mod entry_service;

pub use dashboard_service::{build_dashboard, DashboardReport, TruckProfitRow};
pub use entry_service::{add_monthly_expense, add_trip};
