//! Recall data model.
//!
//! All types exchanged between the recall pipeline and its collaborators
//! live here: signal events and confirmed sets, safety state and decisions,
//! motor orders/positions/commands, and command-arm sequence steps.

pub mod motor;
pub mod safety;
pub mod sequence;
pub mod signal;
