//! Domain services

pub mod aggregation;

pub use aggregation::{
    fold_branch_summary, fold_truck_summary, monthly_expense_total,
    monthly_expense_total_for_truck, net_profit, overall_totals, truck_summaries,
};
