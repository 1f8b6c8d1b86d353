//! Application service layer - config, store wiring, dashboard, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
pub mod validation;
