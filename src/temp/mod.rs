//! Scoped temp files and directories with guaranteed cleanup.
mod error;
mod handle;
mod keeper;
mod options;

pub use error::{TempError, TempReason, TempResult};
pub use handle::{TempDirHandle, TempFileHandle, TempHandle, TempKind};
pub use keeper::{KeeperState, TempKeeper};
pub use options::{DEFAULT_RAND_LEN, TempOptions};
