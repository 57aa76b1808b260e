use std::path::{Path, PathBuf};

/// Lets option setters take `&str`, `String`, `&Path` or `PathBuf` directly.
pub trait OptionFrom<T> {
    fn to_opt(self) -> Option<T>;
}

impl OptionFrom<String> for &str {
    fn to_opt(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl OptionFrom<String> for String {
    fn to_opt(self) -> Option<String> {
        Some(self)
    }
}

impl<T> OptionFrom<T> for Option<T> {
    fn to_opt(self) -> Option<T> {
        self
    }
}

impl OptionFrom<PathBuf> for &str {
    fn to_opt(self) -> Option<PathBuf> {
        Some(PathBuf::from(self))
    }
}

impl OptionFrom<PathBuf> for PathBuf {
    fn to_opt(self) -> Option<PathBuf> {
        Some(self)
    }
}

impl OptionFrom<PathBuf> for &Path {
    fn to_opt(self) -> Option<PathBuf> {
        Some(self.to_path_buf())
    }
}

impl OptionFrom<PathBuf> for &PathBuf {
    fn to_opt(self) -> Option<PathBuf> {
        Some(self.clone())
    }
}
