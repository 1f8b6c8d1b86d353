//! Output formatting module

use serde::Serialize;
use truckbook_app::app::DashboardReport;
use truckbook_types::{BranchSummary, MonthlyExpenseRecord, OutputFormat, Result, TripRecord, TruckSummary};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}

pub fn output_trip(output_format: OutputFormat, trip: &TripRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(trip);
    }

    println!("\nTrip Recorded");
    println!("=============");
    println!("ID:          {}", trip.id);
    println!("Truck:       {}", trip.truck_number);
    println!("Driver:      {}", trip.driver_name);
    println!("Branch:      {}", trip.branch);
    println!("Date:        {}", trip.date);
    println!("Location:    {}", trip.location);
    println!("Kilometers:  {:.1}", trip.kilometers);
    println!("Revenue:     {:.2}", trip.total_revenue);
    println!("Total cost:  {:.2}", trip.total_cost);
    println!("Profit:      {:.2}", trip.profit);
    Ok(())
}

pub fn output_trips(output_format: OutputFormat, trips: &[&TripRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(trips);
    }

    if trips.is_empty() {
        println!("No trips found.");
        return Ok(());
    }

    println!(
        "{:<32} {:<10} {:<12} {:<10} {:>8} {:>10} {:>10} {:>10}",
        "ID", "Truck", "Branch", "Date", "Km", "Revenue", "Cost", "Profit"
    );
    println!("{}", "-".repeat(110));

    for trip in trips {
        println!(
            "{:<32} {:<10} {:<12} {:<10} {:>8.1} {:>10.2} {:>10.2} {:>10.2}",
            trip.id,
            truncate(&trip.truck_number, 10),
            truncate(&trip.branch, 12),
            trip.date,
            trip.kilometers,
            trip.total_revenue,
            trip.total_cost,
            trip.profit
        );
    }

    println!();
    println!("{} trip(s)", trips.len());
    Ok(())
}

pub fn output_truck_summary(output_format: OutputFormat, summary: &TruckSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(summary);
    }

    println!("\nTruck Summary: {}", summary.truck_number);
    println!("=================");
    println!("Trips:          {}", summary.total_trips);
    println!("Kilometers:     {:.1}", summary.total_kilometers);
    println!("Revenue:        {:.2}", summary.total_revenue);
    println!("Cost:           {:.2}", summary.total_cost);
    println!("Profit:         {:.2}", summary.total_profit);
    println!("Profit per km:  {:.2}", summary.average_profit_per_km);
    Ok(())
}

pub fn output_branch_summary(output_format: OutputFormat, summary: &BranchSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(summary);
    }

    println!("\nBranch Summary: {}", summary.branch);
    println!("==================");
    println!("Trucks:         {}", summary.total_trucks);
    println!("Trips:          {}", summary.total_trips);
    println!("Kilometers:     {:.1}", summary.total_kilometers);
    println!("Revenue:        {:.2}", summary.total_revenue);
    println!("Cost:           {:.2}", summary.total_cost);
    println!("Profit:         {:.2}", summary.total_profit);
    println!("Profit per km:  {:.2}", summary.average_profit_per_km);
    Ok(())
}

pub fn output_expense(output_format: OutputFormat, expense: &MonthlyExpenseRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(expense);
    }

    println!("\nMonthly Expense Recorded");
    println!("========================");
    println!("ID:             {}", expense.id);
    println!("Truck:          {}", expense.truck_number);
    println!("Period:         {} {}", expense.month_name(), expense.year);
    println!("Driver salary:  {:.2}", expense.driver_salary);
    println!("Maintenance:    {:.2}", expense.maintenance_cost);
    println!("Other:          {:.2}", expense.other_monthly_expenses);
    println!("Total:          {:.2}", expense.total_monthly_expense);
    Ok(())
}

pub fn output_expenses(output_format: OutputFormat, expenses: &[&MonthlyExpenseRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(expenses);
    }

    if expenses.is_empty() {
        println!("No monthly expenses found.");
        return Ok(());
    }

    println!(
        "{:<32} {:<10} {:<15} {:>10} {:>10} {:>10} {:>10}",
        "ID", "Truck", "Period", "Salary", "Maint.", "Other", "Total"
    );
    println!("{}", "-".repeat(103));

    for e in expenses {
        println!(
            "{:<32} {:<10} {:<15} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            e.id,
            truncate(&e.truck_number, 10),
            format!("{} {}", truncate(e.month_name(), 9), e.year),
            e.driver_salary,
            e.maintenance_cost,
            e.other_monthly_expenses,
            e.total_monthly_expense
        );
    }

    Ok(())
}

pub fn output_names(output_format: OutputFormat, names: &[String]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(names);
    }

    for name in names {
        println!("{}", name);
    }
    Ok(())
}

pub fn output_dashboard(output_format: OutputFormat, report: &DashboardReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    let totals = &report.totals;
    println!("\nFleet Dashboard");
    println!("===============");
    println!("Trucks:            {}", totals.total_trucks);
    println!("Trips:             {}", totals.total_trips);
    println!("Kilometers:        {:.1}", totals.total_kilometers);
    println!("Revenue:           {:.2}", totals.total_revenue);
    println!("Trip cost:         {:.2}", totals.total_cost);
    println!("Trip profit:       {:.2}", totals.total_profit);
    println!("Monthly expenses:  {:.2}", totals.total_monthly_expenses);
    println!("Net profit:        {:.2}", report.net_profit);

    if !report.trucks.is_empty() {
        println!("\n--- By Truck ---");
        println!(
            "{:<12} {:>6} {:>10} {:>12} {:>10} {:>12} {:>12}",
            "Truck", "Trips", "Km", "Profit", "Per km", "Monthly", "Net"
        );
        println!("{}", "-".repeat(80));
        for row in &report.trucks {
            let s = &row.summary;
            println!(
                "{:<12} {:>6} {:>10.1} {:>12.2} {:>10.2} {:>12.2} {:>12.2}",
                truncate(&s.truck_number, 12),
                s.total_trips,
                s.total_kilometers,
                s.total_profit,
                s.average_profit_per_km,
                row.monthly_expenses,
                row.net_profit
            );
        }
    }

    if !report.branches.is_empty() {
        println!("\n--- By Branch ---");
        println!(
            "{:<16} {:>7} {:>6} {:>10} {:>12} {:>10}",
            "Branch", "Trucks", "Trips", "Km", "Profit", "Per km"
        );
        println!("{}", "-".repeat(66));
        for b in &report.branches {
            println!(
                "{:<16} {:>7} {:>6} {:>10.1} {:>12.2} {:>10.2}",
                truncate(&b.branch, 16),
                b.total_trucks,
                b.total_trips,
                b.total_kilometers,
                b.total_profit,
                b.average_profit_per_km
            );
        }
    }

    Ok(())
}
