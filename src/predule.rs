pub use derive_getters::Getters;
pub use log::{debug, error, info};
pub use orion_error::{ErrorOwe, ErrorWith, StructError, ToStructError, WithContext};
pub use serde_derive::{Deserialize, Serialize};

pub use std::path::Path;
pub use std::path::PathBuf;

pub use crate::temp::{TempDirHandle, TempFileHandle, TempKeeper, TempOptions, TempResult};
