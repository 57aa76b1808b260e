use derive_more::From;
use orion_error::{ErrorCode, StructError, UvsReason};
use serde_derive::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Serialize, PartialEq, Error, From)]
pub enum DictReason {
    #[error("no such attribute: {0}")]
    NoSuchAttribute(String),
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for DictReason {
    fn error_code(&self) -> i32 {
        match self {
            DictReason::NoSuchAttribute(_) => 530,
            DictReason::Uvs(r) => r.error_code(),
        }
    }
}

pub type DictResult<T> = Result<T, StructError<DictReason>>;
pub type DictError = StructError<DictReason>;
