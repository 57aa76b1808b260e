use std::time::{Duration, SystemTime, UNIX_EPOCH};

use derive_more::From;
use orion_error::{ErrorCode, StructError, ToStructError, UvsReason};
use rand::Rng;
use serde_derive::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Serialize, PartialEq, Error, From)]
pub enum TimeReason {
    #[error("end is before start by {0:?}")]
    Range(Duration),
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for TimeReason {
    fn error_code(&self) -> i32 {
        match self {
            TimeReason::Range(_) => 540,
            TimeReason::Uvs(r) => r.error_code(),
        }
    }
}

pub type TimeResult<T> = Result<T, StructError<TimeReason>>;
pub type TimeError = StructError<TimeReason>;

/// Seconds since the Unix epoch, negative for earlier instants.
pub fn epoch_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}

/// 在 `[start, end]` 内随机取一个时间点，精度为秒
pub fn random_time_between(start: SystemTime, end: SystemTime) -> TimeResult<SystemTime> {
    let span = end
        .duration_since(start)
        .map_err(|e| TimeReason::Range(e.duration()).to_err())?;
    let offset = rand::rng().random_range(0..=span.as_secs());
    Ok(start + Duration::from_secs(offset))
}
