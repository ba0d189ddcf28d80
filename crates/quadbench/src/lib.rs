//! quadbench library: application logic for the quadrature benchmark.

pub mod app;
pub mod config;
pub mod errors;
