//! Safety module root.
//!
//! Recall interlock gate. A recall is only executed when no operator switch
//! is engaged, no competing bus command is active, and motor positions are
//! known.

pub mod gate;
