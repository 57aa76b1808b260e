use std::{
    fs::File,
    path::{Path, PathBuf},
};

use derive_getters::Getters;
use derive_more::{Display, From};

/// 临时文件句柄：打开的文件描述符及其路径
#[derive(Getters, Debug)]
pub struct TempFileHandle {
    file: File,
    path: PathBuf,
}

impl TempFileHandle {
    pub(crate) fn new(file: File, path: PathBuf) -> Self {
        Self { file, path }
    }

    pub fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    pub fn into_parts(self) -> (File, PathBuf) {
        (self.file, self.path)
    }
}

impl AsRef<Path> for TempFileHandle {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// 临时目录句柄
#[derive(Getters, Clone, Debug, PartialEq, Eq, From)]
pub struct TempDirHandle {
    path: PathBuf,
}

impl AsRef<Path> for TempDirHandle {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TempKind {
    #[display("file")]
    File,
    #[display("dir")]
    Dir,
}

/// A resource tracked by [`TempKeeper`](super::TempKeeper).
#[derive(Debug, From)]
pub enum TempHandle {
    File(TempFileHandle),
    Dir(TempDirHandle),
}

impl TempHandle {
    pub fn path(&self) -> &Path {
        match self {
            TempHandle::File(h) => h.path().as_path(),
            TempHandle::Dir(h) => h.path().as_path(),
        }
    }

    pub fn kind(&self) -> TempKind {
        match self {
            TempHandle::File(_) => TempKind::File,
            TempHandle::Dir(_) => TempKind::Dir,
        }
    }

    /// 关闭描述符（如有）并删除对应的文件系统对象
    pub(crate) fn remove(self) -> std::io::Result<()> {
        match self {
            TempHandle::File(h) => {
                let (file, path) = h.into_parts();
                drop(file);
                std::fs::remove_file(&path)
            }
            TempHandle::Dir(h) => std::fs::remove_dir_all(h.path()),
        }
    }
}
