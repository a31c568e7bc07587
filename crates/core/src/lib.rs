//! Shared domain types for the CareTrack event pipeline.
//!
//! This crate holds the building blocks used across the workspace:
//!
//! - [`types`] -- ID and timestamp aliases.
//! - [`error`] -- the [`CoreError`](error::CoreError) domain error taxonomy.
//! - [`event_types`] -- canonical event type name constants.
//! - [`severity`] -- notification severity constants.
//! - [`path`] -- dotted-path accessor into JSON event payloads.

pub mod error;
pub mod event_types;
pub mod path;
pub mod severity;
pub mod types;

pub use error::{CoreError, CoreResult};
