//! Mapping variants: attribute-style record, content-hashed map, key-sorted map.
mod attr;
mod error;
mod hashable;
mod sorted;

pub use attr::{AttrDict, AttrMap};
pub use error::{DictError, DictReason, DictResult};
pub use hashable::HashableDict;
pub use sorted::sort_by_key;
