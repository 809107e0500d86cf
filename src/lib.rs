//! SAT, LSAT and UK degree classification score conversions.
//!
//! The engines in [`engines`] are pure functions over compiled-in [`tables`].
//! [`core`] wires them to configuration and renders results through the
//! [`core::report::Reportable`] adapter.

pub mod config;
pub mod core;
pub mod engines;
pub mod tables;
pub mod utils;
