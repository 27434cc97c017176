//! Core use-case services.
//!
//! # Responsibility
//! - Share one authoritative store between every consumer view.
//! - Hold view-local draft state until it is submitted or cancelled.
//!
//! # Invariants
//! - Views never hold a mutable reference to the store; they read snapshots
//!   and call session mutators.

pub mod draft_form;
pub mod session;
