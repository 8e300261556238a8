//! Storage gateway: types, traits, and the S3 backend.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 session::Session                    │
//! │   drives the gateway, reconciles state after calls  │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            StoreFactory / ObjectStore               │
//! │   list · download_url · upload · delete · folder    │
//! └─────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//!               ┌─────────────────────┐
//!               │  S3Store (OpenDAL)  │
//!               └─────────────────────┘
//! ```

mod s3;
mod traits;
mod types;

pub use s3::{S3Store, S3StoreFactory};
pub use traits::{BoxedObjectStore, ObjectStore, ProgressFn, StoreFactory};
pub use types::{sort_entries, EntryKind, ObjectEntry};
