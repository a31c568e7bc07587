//! CareTrack event emission and automation processing.
//!
//! This crate is the pipeline behind the platform's compliance
//! notifications:
//!
//! - [`emitter`] -- validates and appends a new event to the `org_events`
//!   log, optionally processing it in the same call.
//! - [`processor`] -- the unit of work for one event id: feed projection,
//!   baseline notifications, then automation evaluation.
//! - [`engine`] -- the tenant-configurable condition/action rule engine
//!   with its per-(automation, event) idempotency gate.
//! - [`feed`] -- pure event-to-feed-message rendering.
//! - [`scanner`] -- the overdue-assignment sweep that feeds the pipeline.
//!
//! Processing is at-least-once: a stored event whose synchronous
//! processing failed stays durable and can be reprocessed later.

pub mod emitter;
pub mod engine;
pub mod error;
pub mod feed;
pub mod processor;
pub mod scanner;

pub use emitter::{emit, EmitOutcome, EmitRequest};
pub use engine::AutomationOutcome;
pub use error::PipelineError;
pub use processor::{process, ProcessReport};
pub use scanner::{OverdueScanner, ScanReport};
