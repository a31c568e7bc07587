pub mod assignment;
pub mod automation;
pub mod event;
pub mod feed;
pub mod notification;
pub mod staff;
