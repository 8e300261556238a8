//! Service layer: credentials handling and the storage gateway.

pub mod credentials;
pub mod storage;
