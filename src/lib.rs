//! Payroll Engine
//!
//! This crate computes net pay, income tax, and employer cost from an
//! employee's gross salary under capped social-insurance contributions and a
//! progressive income-tax schedule, and serves the calculation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
