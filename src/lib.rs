//! Employee Directory engine
//!
//! This crate records employees, tracks attendance and performance ratings,
//! calculates salary from attendance and rating, and exports the employee
//! table as tab-separated text.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod form;
pub mod models;
