use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

static LAST_STAMP: AtomicU64 = AtomicU64::new(0);

/// Per-request timestamp used to name the uploaded blob and the
/// transcription job.
///
/// Stamps are microseconds since the Unix epoch and strictly increase within
/// the process, so two requests arriving in the same instant still get
/// distinct names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestStamp(u64);

impl RequestStamp {
    pub fn next() -> Self {
        let now = u64::try_from(Utc::now().timestamp_micros()).unwrap_or(0);
        let mut last = LAST_STAMP.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match LAST_STAMP.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(candidate),
                Err(observed) => last = observed,
            }
        }
    }

    pub fn object_name(&self) -> String {
        format!("audio_{}.wav", self.0)
    }

    pub fn job_name(&self) -> String {
        format!("transcribe_{}", self.0)
    }
}

impl fmt::Display for RequestStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
