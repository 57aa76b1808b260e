//! 通用辅助工具库：作用域临时资源、字典变体、文本与时间辅助函数

pub mod datetime;
pub mod dict;
pub mod opt;
pub mod predule;
pub mod seq;
pub mod temp;
pub mod text;
pub mod tools;

// Re-export commonly used items at the crate root for ergonomic imports
pub use dict::{AttrDict, DictReason, HashableDict, sort_by_key};
pub use seq::{Truthy, first_truthy, flatten, unique};
pub use temp::{
    KeeperState, TempDirHandle, TempFileHandle, TempHandle, TempKeeper, TempOptions, TempReason,
    TempResult,
};
pub use text::{is_hex, is_int, padded_split, random_token, url_join};
pub use tools::touch;
