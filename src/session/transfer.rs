//! Upload progress tracking.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Shared upload progress, safe to poll from another thread while the
/// transfer callback updates it.
#[derive(Debug, Default)]
pub struct UploadProgress {
    active: AtomicBool,
    percent: AtomicU8,
}

impl UploadProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a transfer as started at 0%.
    pub fn start(&self) {
        self.percent.store(0, Ordering::Release);
        self.active.store(true, Ordering::Release);
    }

    /// Update from byte counts. A zero total (empty file) reads as 100%.
    pub fn set_bytes(&self, written: u64, total: u64) {
        let percent = if total == 0 {
            100
        } else {
            ((written.min(total) * 100) / total) as u8
        };
        self.percent.store(percent, Ordering::Release);
    }

    /// Mark the transfer finished and reset to the idle state.
    pub fn finish(&self) {
        self.active.store(false, Ordering::Release);
        self.percent.store(0, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn percent(&self) -> u8 {
        self.percent.load(Ordering::Acquire)
    }
}
