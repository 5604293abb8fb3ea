//! MSM Common Library
//!
//! This crate provides the types, constants and configuration loading
//! utilities shared by all MSM recall workspace crates.
//!
//! # Module Structure
//!
//! - [`recall`] - Recall data model (signals, safety, motors, sequences)
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - System-wide constants
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use msm_common::prelude::*;
//!
//! let order = MotorOrder::Target(70);
//! assert!(order.is_target());
//! ```

pub mod config;
pub mod consts;
pub mod prelude;
pub mod recall;
