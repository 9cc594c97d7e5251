//! Core data models for the employee directory.

mod employee;

pub use employee::{Employee, RatingUpdate};
