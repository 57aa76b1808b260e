use derive_more::From;
use orion_error::{ErrorCode, StructError, UvsReason};
use serde_derive::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Serialize, PartialEq, Error, From)]
pub enum TempReason {
    #[error("create temp resource failed: {0}")]
    Create(String),
    #[error("cleanup failed for {} of {total} temp resources", .failures.len())]
    Cleanup { total: usize, failures: Vec<String> },
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for TempReason {
    fn error_code(&self) -> i32 {
        match self {
            TempReason::Create(_) => 520,
            TempReason::Cleanup { .. } => 521,
            TempReason::Uvs(r) => r.error_code(),
        }
    }
}

pub type TempResult<T> = Result<T, StructError<TempReason>>;
pub type TempError = StructError<TempReason>;
