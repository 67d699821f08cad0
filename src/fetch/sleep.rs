//! Sleep abstraction for the polite client
//!
//! Throttle and backoff delays are real wall-clock side effects of every
//! fetch. Tests need to observe them without actually waiting, so the client
//! is generic over this trait instead of calling `tokio::time::sleep`
//! directly.

use std::future::Future;
use std::time::Duration;

/// Injectable sleep used for rate limiting and retry backoff
pub trait Sleep: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleep;

impl Sleep for TokioSleep {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
