use std::path::PathBuf;

use getset::{Getters, Setters, WithSetters};
use serde_derive::{Deserialize, Serialize};
use tempfile::Builder;

use crate::opt::OptionFrom;

/// 随机文件名部分的默认长度，与 `tempfile::Builder` 保持一致
pub const DEFAULT_RAND_LEN: usize = 6;

/// Options for creating a temp file or directory.
///
/// `prefix`/`suffix` wrap the random part of the name, `dir` selects the
/// parent directory (the system temp dir when unset).
#[derive(
    Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Getters, Setters, WithSetters,
)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct TempOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dir: Option<PathBuf>,
    #[getset(set_with = "pub")]
    rand_len: usize,
}

impl Default for TempOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            suffix: None,
            dir: None,
            rand_len: DEFAULT_RAND_LEN,
        }
    }
}

impl TempOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix<S: OptionFrom<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.to_opt();
        self
    }

    pub fn with_suffix<S: OptionFrom<String>>(mut self, suffix: S) -> Self {
        self.suffix = suffix.to_opt();
        self
    }

    pub fn with_dir<S: OptionFrom<PathBuf>>(mut self, dir: S) -> Self {
        self.dir = dir.to_opt();
        self
    }

    /// 目标父目录，未设置时使用系统临时目录
    pub fn parent_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub(crate) fn builder(&self) -> Builder<'_, '_> {
        let mut builder = Builder::new();
        if let Some(prefix) = &self.prefix {
            builder.prefix(prefix);
        }
        if let Some(suffix) = &self.suffix {
            builder.suffix(suffix);
        }
        builder.rand_bytes(self.rand_len);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = TempOptions::default();
        assert_eq!(opts.prefix(), &None);
        assert_eq!(opts.suffix(), &None);
        assert_eq!(opts.dir(), &None);
        assert_eq!(*opts.rand_len(), DEFAULT_RAND_LEN);
        assert_eq!(opts.parent_dir(), std::env::temp_dir());
    }

    #[test]
    fn test_fluent_setters() {
        let opts = TempOptions::new()
            .with_prefix("job-")
            .with_suffix(".log")
            .with_dir("/var/tmp")
            .with_rand_len(12);
        assert_eq!(opts.prefix().as_deref(), Some("job-"));
        assert_eq!(opts.suffix().as_deref(), Some(".log"));
        assert_eq!(opts.parent_dir(), PathBuf::from("/var/tmp"));
        assert_eq!(*opts.rand_len(), 12);
    }

    #[test]
    fn test_options_from_toml() {
        let content = r#"
prefix = "cache-"
dir = "/var/tmp"
"#;
        let opts: TempOptions = toml::from_str(content).unwrap();
        assert_eq!(opts.prefix().as_deref(), Some("cache-"));
        assert_eq!(opts.suffix(), &None);
        assert_eq!(opts.dir().as_deref(), Some(std::path::Path::new("/var/tmp")));
        assert_eq!(*opts.rand_len(), DEFAULT_RAND_LEN);
    }

    #[test]
    fn test_options_yaml_json() {
        let opts = TempOptions::new().with_suffix(".json").with_rand_len(8);
        let yml = serde_yaml::to_string(&opts).unwrap();
        let loaded: TempOptions = serde_yaml::from_str(&yml).unwrap();
        assert_eq!(opts, loaded);

        let json = serde_json::to_string(&opts).unwrap();
        assert!(!json.contains("prefix"));
        let loaded: TempOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, loaded);
    }
}
