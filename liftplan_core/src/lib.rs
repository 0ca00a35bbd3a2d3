#![forbid(unsafe_code)]

//! Core domain model and business logic for the Liftplan system.
//!
//! This crate provides:
//! - Domain types (exercise records, requests, prescriptions, logs)
//! - Catalog loading from CSV
//! - Muscle prioritization, exercise selection and session assembly
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod prioritizer;
pub mod selector;
pub mod assembler;
pub mod engine;
pub mod workout_log;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::Catalog;
pub use config::{Config, TrainingConfig};
pub use engine::{generate_workout, reshuffle_exercise};
pub use workout_log::{summarize, LOG_ACK_MESSAGE};
