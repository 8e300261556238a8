//! Session state: navigation history, notifications, transfer progress,
//! and the controller tying them to the storage gateway.

mod browser;
mod history;
mod notify;
mod transfer;

pub use browser::{Preview, Session, ViewMode};
pub use history::PathHistory;
pub use notify::{Notification, NotificationSink, Severity, TracingSink};
pub use transfer::UploadProgress;
