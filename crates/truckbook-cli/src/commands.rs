//! Command handlers

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use truckbook_app::app::{add_monthly_expense, add_trip, build_dashboard};
use truckbook_app::config::Config;
use truckbook_app::export::export_to_excel;
use truckbook_app::repository::{open_stores, Stores};
use truckbook_app::validation::validate_date_range;
use truckbook_types::{ConfigError, Error, NewMonthlyExpense, NewTrip, OutputFormat, Result, TripRecord};

use crate::cli::{Cli, Commands, ExpenseCommand, TripCommand};
use crate::output::{
    output_branch_summary, output_dashboard, output_expense, output_expenses, output_names,
    output_trip, output_trips, output_truck_summary,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Trip { action } => {
            let (config, output_format) = load_config(cli.data_dir, cli.format)?;
            let mut stores = open_stores(&config)?;
            cmd_trip(&mut stores, action, output_format)
        }

        Commands::Expense { action } => {
            let (config, output_format) = load_config(cli.data_dir, cli.format)?;
            let mut stores = open_stores(&config)?;
            cmd_expense(&mut stores, &config, action, output_format)
        }

        Commands::Dashboard => {
            let (config, output_format) = load_config(cli.data_dir, cli.format)?;
            let stores = open_stores(&config)?;
            let report = build_dashboard(&stores.trips, &stores.monthly_expenses);
            output_dashboard(output_format, &report)
        }

        Commands::Export { output } => {
            let (config, _) = load_config(cli.data_dir, cli.format)?;
            cmd_export(&config, output)
        }

        // Handled without loading first so a broken config file can be repaired
        Commands::Config {
            show,
            set_data_dir,
            set_output,
            set_year_min,
            set_year_max,
            reset,
        } => cmd_config_at(
            &Config::config_path()?,
            show,
            set_data_dir,
            set_output,
            set_year_min,
            set_year_max,
            reset,
        ),
    }
}

/// Load config and apply CLI overrides
fn load_config(
    data_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<(Config, OutputFormat)> {
    let mut config = Config::load()?;

    if data_dir.is_some() {
        config.data_dir = data_dir;
    }
    let output_format = format.unwrap_or(config.output_format);

    Ok((config, output_format))
}

/// Keep only trips present in both lists
fn intersect<'a>(current: Vec<&'a TripRecord>, matched: &[&'a TripRecord]) -> Vec<&'a TripRecord> {
    current
        .into_iter()
        .filter(|t| matched.iter().any(|m| std::ptr::eq(*t, *m)))
        .collect()
}

fn cmd_trip(stores: &mut Stores, action: TripCommand, output_format: OutputFormat) -> Result<()> {
    let trips = &mut stores.trips;

    match action {
        TripCommand::Add {
            truck,
            driver,
            branch,
            date,
            location,
            km,
            fuel,
            other,
            revenue,
        } => {
            let trip = add_trip(
                trips,
                NewTrip {
                    truck_number: truck,
                    driver_name: driver,
                    branch,
                    date,
                    location,
                    kilometers: km,
                    fuel_cost: fuel,
                    other_expenses: other,
                    total_revenue: revenue,
                },
            )?;
            output_trip(output_format, &trip)
        }

        TripCommand::List {
            truck,
            branch,
            from,
            to,
        } => {
            let mut selected: Vec<&TripRecord> = trips.all().iter().collect();

            if let Some(ref query) = truck {
                selected = intersect(selected, &trips.find_by_truck_number(query));
            }
            if let Some(ref query) = branch {
                selected = intersect(selected, &trips.find_by_branch(query));
            }
            if let (Some(start), Some(end)) = (from.as_deref(), to.as_deref()) {
                validate_date_range(start, end)?;
                selected = intersect(selected, &trips.find_by_date_range(start, end));
            }

            output_trips(output_format, &selected)
        }

        TripCommand::Delete { id } => {
            if trips.delete(&id) {
                info!(id = %id, "trip deleted");
                println!("Deleted trip {}", id);
            } else {
                println!("No trip with ID {}", id);
            }
            Ok(())
        }

        TripCommand::Summary { truck, branch } => {
            if let Some(truck) = truck {
                let summary = trips
                    .summary_for_truck(&truck)
                    .ok_or_else(|| Error::NotFound(format!("no trips for truck '{}'", truck)))?;
                output_truck_summary(output_format, &summary)
            } else if let Some(branch) = branch {
                let summary = trips
                    .summary_for_branch(&branch)
                    .ok_or_else(|| Error::NotFound(format!("no trips for branch '{}'", branch)))?;
                output_branch_summary(output_format, &summary)
            } else {
                Err(Error::InvalidInput(
                    "give --truck or --branch".to_string(),
                ))
            }
        }

        TripCommand::Trucks => output_names(output_format, &trips.distinct_truck_numbers()),

        TripCommand::Branches => output_names(output_format, &trips.distinct_branches()),
    }
}

fn cmd_expense(
    stores: &mut Stores,
    config: &Config,
    action: ExpenseCommand,
    output_format: OutputFormat,
) -> Result<()> {
    let expenses = &mut stores.monthly_expenses;

    match action {
        ExpenseCommand::Add {
            truck,
            month,
            year,
            salary,
            maintenance,
            other,
        } => {
            let expense = add_monthly_expense(
                expenses,
                NewMonthlyExpense {
                    truck_number: truck,
                    month,
                    year,
                    driver_salary: salary,
                    maintenance_cost: maintenance,
                    other_monthly_expenses: other,
                },
                config,
            )?;
            output_expense(output_format, &expense)
        }

        ExpenseCommand::List { truck } => {
            let selected = match truck {
                Some(ref number) => expenses.find_by_truck_number(number),
                None => expenses.all().iter().collect(),
            };
            output_expenses(output_format, &selected)?;

            if output_format == OutputFormat::Table {
                if let Some(ref number) = truck {
                    println!();
                    println!("Total for {}: {:.2}", number, expenses.total_for_truck(number));
                }
            }
            Ok(())
        }

        ExpenseCommand::Delete { id } => {
            if expenses.delete(&id) {
                info!(id = %id, "monthly expense deleted");
                println!("Deleted monthly expense {}", id);
            } else {
                println!("No monthly expense with ID {}", id);
            }
            Ok(())
        }
    }
}

fn cmd_export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let stores = open_stores(config)?;
    let report = build_dashboard(&stores.trips, &stores.monthly_expenses);
    let output_path = output.unwrap_or_else(|| PathBuf::from("truckbook.xlsx"));

    export_to_excel(
        &report,
        stores.trips.all(),
        stores.monthly_expenses.all(),
        &output_path,
    )?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_config_at(
    path: &Path,
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_year_min: Option<i32>,
    set_year_max: Option<i32>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = match Config::load_from(path) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::ParseError(msg))) => {
            warn!(error = %msg, "unreadable configuration, starting from defaults");
            Config::default()
        }
        Err(e) => return Err(e),
    };
    let mut modified = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(year) = set_year_min {
        config.year_min = year;
        modified = true;
    }

    if let Some(year) = set_year_max {
        config.year_max = year;
        modified = true;
    }

    if config.year_min > config.year_max {
        return Err(Error::InvalidInput(format!(
            "year range is empty: {} > {}",
            config.year_min, config.year_max
        )));
    }

    if modified {
        config.save_to(path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
