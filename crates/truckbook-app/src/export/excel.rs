//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use truckbook_types::{Error, MonthlyExpenseRecord, Result, TripRecord};

use crate::app::DashboardReport;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export the dashboard and both collections to an Excel file
pub fn export_to_excel(
    report: &DashboardReport,
    trips: &[TripRecord],
    monthly_expenses: &[MonthlyExpenseRecord],
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let trucks_sheet = workbook.add_worksheet();
    write_trucks_sheet(trucks_sheet, report)?;

    let trips_sheet = workbook.add_worksheet();
    write_trips_sheet(trips_sheet, trips)?;

    let expenses_sheet = workbook.add_worksheet();
    write_expenses_sheet(expenses_sheet, monthly_expenses)?;

    workbook.save(output_path).map_err(excel_err)?;

    Ok(())
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
    let header_format = Format::new().set_bold();

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &DashboardReport) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    sheet
        .write_string_with_format(0, 0, "Fleet Summary", &header_format)
        .map_err(excel_err)?;

    let totals = &report.totals;
    let rows: [(&str, f64); 8] = [
        ("Total Trucks:", totals.total_trucks as f64),
        ("Total Trips:", totals.total_trips as f64),
        ("Total Kilometers:", totals.total_kilometers),
        ("Total Revenue:", totals.total_revenue),
        ("Total Cost:", totals.total_cost),
        ("Total Profit:", totals.total_profit),
        ("Monthly Expenses:", totals.total_monthly_expenses),
        ("Net Profit:", report.net_profit),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        let row = i as u32 + 2;
        sheet.write_string(row, 0, *label).map_err(excel_err)?;
        sheet.write_number(row, 1, *value).map_err(excel_err)?;
    }

    Ok(())
}

fn write_trucks_sheet(sheet: &mut Worksheet, report: &DashboardReport) -> Result<()> {
    sheet.set_name("Trucks").map_err(excel_err)?;

    write_headers(
        sheet,
        &[
            "Truck",
            "Trips",
            "Kilometers",
            "Revenue",
            "Cost",
            "Trip Profit",
            "Profit/km",
            "Monthly Expenses",
            "Net Profit",
        ],
    )?;

    for (i, row) in report.trucks.iter().enumerate() {
        let r = i as u32 + 1;
        let s = &row.summary;
        sheet.write_string(r, 0, &s.truck_number).map_err(excel_err)?;
        let values = [
            s.total_trips as f64,
            s.total_kilometers,
            s.total_revenue,
            s.total_cost,
            s.total_profit,
            s.average_profit_per_km,
            row.monthly_expenses,
            row.net_profit,
        ];
        for (offset, value) in values.iter().enumerate() {
            sheet
                .write_number(r, offset as u16 + 1, *value)
                .map_err(excel_err)?;
        }
    }

    Ok(())
}

fn write_trips_sheet(sheet: &mut Worksheet, trips: &[TripRecord]) -> Result<()> {
    sheet.set_name("Trips").map_err(excel_err)?;

    write_headers(
        sheet,
        &[
            "ID",
            "Truck",
            "Driver",
            "Branch",
            "Date",
            "Location",
            "Kilometers",
            "Fuel Cost",
            "Other Expenses",
            "Revenue",
            "Total Cost",
            "Profit",
        ],
    )?;

    for (i, trip) in trips.iter().enumerate() {
        let r = i as u32 + 1;
        let texts = [
            &trip.id,
            &trip.truck_number,
            &trip.driver_name,
            &trip.branch,
            &trip.date,
            &trip.location,
        ];
        for (col, text) in texts.iter().enumerate() {
            sheet
                .write_string(r, col as u16, text.as_str())
                .map_err(excel_err)?;
        }

        let numbers = [
            trip.kilometers,
            trip.fuel_cost,
            trip.other_expenses,
            trip.total_revenue,
            trip.total_cost,
            trip.profit,
        ];
        for (offset, value) in numbers.iter().enumerate() {
            sheet
                .write_number(r, (texts.len() + offset) as u16, *value)
                .map_err(excel_err)?;
        }
    }

    Ok(())
}

fn write_expenses_sheet(sheet: &mut Worksheet, expenses: &[MonthlyExpenseRecord]) -> Result<()> {
    sheet.set_name("Monthly Expenses").map_err(excel_err)?;

    write_headers(
        sheet,
        &[
            "ID",
            "Truck",
            "Month",
            "Year",
            "Driver Salary",
            "Maintenance",
            "Other",
            "Total",
        ],
    )?;

    for (i, expense) in expenses.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, &expense.id).map_err(excel_err)?;
        sheet
            .write_string(r, 1, &expense.truck_number)
            .map_err(excel_err)?;
        sheet
            .write_string(r, 2, expense.month_name())
            .map_err(excel_err)?;
        sheet
            .write_number(r, 3, expense.year as f64)
            .map_err(excel_err)?;
        sheet
            .write_number(r, 4, expense.driver_salary)
            .map_err(excel_err)?;
        sheet
            .write_number(r, 5, expense.maintenance_cost)
            .map_err(excel_err)?;
        sheet
            .write_number(r, 6, expense.other_monthly_expenses)
            .map_err(excel_err)?;
        sheet
            .write_number(r, 7, expense.total_monthly_expense)
            .map_err(excel_err)?;
    }

    Ok(())
}
