//! Database models backing the domain aggregates.

pub mod cliente;
pub mod config;
pub mod personal;
