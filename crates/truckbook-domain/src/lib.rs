//! Domain layer - aggregation services and persistence traits

pub mod repository;
pub mod service;
