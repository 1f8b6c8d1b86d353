//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use truckbook_types::OutputFormat;

#[derive(Parser)]
#[command(name = "truckbook")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Track truck trips and monthly expenses, with per-truck and per-branch profit")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory override. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record, search and summarize trips
    Trip {
        #[command(subcommand)]
        action: TripCommand,
    },

    /// Record and list monthly expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseCommand,
    },

    /// Fleet totals, per-truck net profit and branch summaries
    Dashboard,

    /// Export dashboard, trips and expenses to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set earliest accepted expense year
        #[arg(long)]
        set_year_min: Option<i32>,

        /// Set latest accepted expense year
        #[arg(long)]
        set_year_max: Option<i32>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum TripCommand {
    /// Record a trip
    Add {
        /// Truck number (e.g., "KA-01-1234")
        #[arg(long)]
        truck: String,

        #[arg(long)]
        driver: String,

        #[arg(long)]
        branch: String,

        /// Trip date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        #[arg(long)]
        location: String,

        /// Distance driven
        #[arg(long)]
        km: f64,

        #[arg(long)]
        fuel: f64,

        /// Tolls, loading charges and similar
        #[arg(long, default_value_t = 0.0)]
        other: f64,

        #[arg(long)]
        revenue: f64,
    },

    /// List trips, optionally filtered
    List {
        /// Truck number contains (case-insensitive)
        #[arg(long)]
        truck: Option<String>,

        /// Branch contains (case-insensitive)
        #[arg(long)]
        branch: Option<String>,

        /// First date of range (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Last date of range (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Delete a trip by ID
    Delete { id: String },

    /// Summarize trips for a truck or a branch
    Summary {
        /// Truck number (substring match; give the full number)
        #[arg(long, conflicts_with = "branch", required_unless_present = "branch")]
        truck: Option<String>,

        /// Branch (substring match)
        #[arg(long)]
        branch: Option<String>,
    },

    /// List distinct truck numbers
    Trucks,

    /// List distinct branches
    Branches,
}

#[derive(Subcommand)]
pub enum ExpenseCommand {
    /// Record a monthly expense
    Add {
        #[arg(long)]
        truck: String,

        /// Month number (1-12)
        #[arg(long)]
        month: String,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        salary: f64,

        #[arg(long)]
        maintenance: f64,

        #[arg(long, default_value_t = 0.0)]
        other: f64,
    },

    /// List monthly expenses
    List {
        /// Exact truck number
        #[arg(long)]
        truck: Option<String>,
    },

    /// Delete a monthly expense by ID
    Delete { id: String },
}
