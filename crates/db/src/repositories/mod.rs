//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod activity_feed_repo;
pub mod assignment_repo;
pub mod automation_repo;
pub mod automation_run_repo;
pub mod event_repo;
pub mod notification_repo;
pub mod staff_repo;

pub use activity_feed_repo::ActivityFeedRepo;
pub use assignment_repo::AssignmentRepo;
pub use automation_repo::AutomationRepo;
pub use automation_run_repo::AutomationRunRepo;
pub use event_repo::EventRepo;
pub use notification_repo::NotificationRepo;
pub use staff_repo::StaffRepo;
