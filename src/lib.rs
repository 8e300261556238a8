//! Single-bucket S3 file browser engine.
//!
//! The crate splits into two layers:
//!
//! - [`services`]: credentials handling plus the storage gateway. The
//!   gateway is a trait ([`ObjectStore`]) with an OpenDAL-backed S3
//!   implementation; each call is stateless and independent.
//! - [`session`]: the controller a UI drives. It owns the credentials,
//!   the navigation history, the current listing, view mode, preview and
//!   upload progress, and converts every failure into a notification.
//!
//! ```no_run
//! use s3explorer::services::storage::S3StoreFactory;
//! use s3explorer::session::{Session, TracingSink};
//!
//! # async fn run() {
//! let mut session = Session::new(Box::new(S3StoreFactory), Box::new(TracingSink));
//! session
//!     .load_credentials_json(r#"{"bucketName":"b","region":"us-east-1","accessKeyId":"k","secretAccessKey":"s"}"#)
//!     .await;
//! for entry in session.entries() {
//!     println!("{} {}", entry.name(), entry.size_display());
//! }
//! # }
//! ```

pub mod error;
pub mod services;
pub mod session;

pub use error::ExplorerError;
pub use services::credentials::{Credentials, CredentialsStore};
pub use services::storage::{ObjectEntry, ObjectStore, S3Store, S3StoreFactory, StoreFactory};
pub use session::{Notification, NotificationSink, Session, ViewMode};

/// Initialize logging from `RUST_LOG`, defaulting to `info`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();
}
