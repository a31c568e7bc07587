//! Canonical event type names.
//!
//! Any producer may emit an arbitrary `event_type` string -- the event log
//! accepts unknown types -- but only the names listed here have a feed
//! rendering and baseline notification rules.

/// A competency assignment was created for a staff member.
pub const ASSIGNMENT_CREATED: &str = "assignment_created";

/// A staff member completed an assignment.
pub const ASSIGNMENT_COMPLETED: &str = "assignment_completed";

/// An assignment passed its due date without completion.
pub const ASSIGNMENT_OVERDUE: &str = "assignment_overdue";

/// A policy was published to the organization.
pub const POLICY_PUBLISHED: &str = "policy_published";

/// A deficiency was logged during a drill check-in.
pub const DEFICIENCY_CREATED: &str = "deficiency_created";
