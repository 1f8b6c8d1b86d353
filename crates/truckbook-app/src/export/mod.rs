//! Export of fleet data to spreadsheet files

pub mod excel;

pub use excel::export_to_excel;
