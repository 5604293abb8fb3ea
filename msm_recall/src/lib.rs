//! # MSM Recall Library
//!
//! Decision pipeline for replaying a stored seat-position recall on a
//! multi-motor seat (track, recline, tilt, command-arm height and fore/aft).
//!
//! ## Pipeline
//!
//! 1. **Acquisition**: debounce the recall signal buffer into a
//!    confirmed signal set
//! 2. **Safety gate**: physical switch, bus command and position interlocks
//! 3. **Motor commands**: derive a directional command per requested motor
//! 4. **Command-arm sequencing**: order height and fore/aft actuation
//!
//! [`cycle::RecallCycle`] runs all four over one input snapshot. Every step
//! is a pure function of its inputs; diagnostics go through `tracing`.

pub mod acquisition;
pub mod config;
pub mod cycle;
pub mod motor;
pub mod safety;
pub mod sequence;
