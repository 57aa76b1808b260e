use contracts::debug_ensures;
use log::{debug, error, info};
use orion_error::{ErrorWith, ToStructError, WithContext};
use orion_infra::auto_exit_log;

use super::{
    error::{TempError, TempReason, TempResult},
    handle::{TempDirHandle, TempFileHandle, TempHandle},
    options::TempOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum KeeperState {
    /// 持有尚未清理的临时资源
    #[display("active")]
    Active,
    /// 未持有任何资源
    #[display("cleaned")]
    Cleaned,
}

/// Creates temp files and directories and removes every one of them exactly
/// once, either on [`cleanup`](TempKeeper::cleanup) or when the keeper drops.
///
/// Entries are removed in creation order. Cleanup is best-effort: every entry
/// is attempted and all failures are reported together in one
/// [`TempReason::Cleanup`] error. The tracked list is empty afterwards either
/// way, so the keeper can be reused.
///
/// All mutation goes through `&mut self`; a keeper shared between threads must
/// be wrapped in a lock by the caller.
///
/// # 示例
/// ```
/// use orion_helpful::temp::{TempKeeper, TempOptions};
///
/// let mut keeper = TempKeeper::new();
/// let file = keeper.create_file(&TempOptions::new().with_suffix(".txt")).unwrap();
/// let dir = keeper.create_dir_default().unwrap();
/// assert!(file.path().exists() && dir.path().exists());
///
/// keeper.cleanup().unwrap();
/// assert!(!file.path().exists() && !dir.path().exists());
/// ```
#[derive(Debug, Default)]
pub struct TempKeeper {
    tracked: Vec<TempHandle>,
}

impl TempKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with a fresh keeper and cleans up once `f` returns.
    ///
    /// The closure's error wins over a cleanup error; a cleanup error after a
    /// successful closure is returned through `From<TempError>`. A panic in
    /// `f` still cleans up through `Drop`.
    pub fn scope<T, E, F>(f: F) -> Result<T, E>
    where
        F: FnOnce(&mut TempKeeper) -> Result<T, E>,
        E: From<TempError>,
    {
        let mut keeper = TempKeeper::new();
        let out = f(&mut keeper);
        let cleaned = keeper.cleanup();
        match (out, cleaned) {
            (Ok(v), Ok(())) => Ok(v),
            (Ok(_), Err(e)) => Err(E::from(e)),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(ce)) => {
                error!(target: "helpful/temp", "scope cleanup failed: {ce}");
                Err(e)
            }
        }
    }

    pub fn tracked(&self) -> &[TempHandle] {
        &self.tracked
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn state(&self) -> KeeperState {
        if self.tracked.is_empty() {
            KeeperState::Cleaned
        } else {
            KeeperState::Active
        }
    }

    /// 创建临时文件并登记
    ///
    /// 返回的句柄持有独立的文件描述符，keeper 自己保留另一份，清理时关闭。
    /// 创建失败时不会登记，也不会在磁盘上留下文件。
    pub fn create_file(&mut self, options: &TempOptions) -> TempResult<TempFileHandle> {
        let parent = options.parent_dir();
        let mut ctx = WithContext::want("create temp file");
        ctx.with_path("dir", &parent);
        let named = options
            .builder()
            .tempfile_in(&parent)
            .map_err(|e| TempReason::Create(format!("temp file: {e}")).to_err())
            .with(&ctx)?;
        let caller_file = named
            .as_file()
            .try_clone()
            .map_err(|e| TempReason::Create(format!("dup descriptor: {e}")).to_err())
            .with(&ctx)?;
        let (file, path) = named
            .keep()
            .map_err(|e| TempReason::Create(format!("keep temp file: {}", e.error)).to_err())
            .with(&ctx)?;
        debug!(target: "helpful/temp", "create temp file {}", path.display());
        self.tracked
            .push(TempHandle::File(TempFileHandle::new(file, path.clone())));
        Ok(TempFileHandle::new(caller_file, path))
    }

    /// 创建临时目录并登记
    pub fn create_dir(&mut self, options: &TempOptions) -> TempResult<TempDirHandle> {
        let parent = options.parent_dir();
        let mut ctx = WithContext::want("create temp dir");
        ctx.with_path("dir", &parent);
        let path = options
            .builder()
            .tempdir_in(&parent)
            .map_err(|e| TempReason::Create(format!("temp dir: {e}")).to_err())
            .with(&ctx)?
            .keep();
        debug!(target: "helpful/temp", "create temp dir {}", path.display());
        let handle = TempDirHandle::from(path);
        self.tracked.push(TempHandle::Dir(handle.clone()));
        Ok(handle)
    }

    pub fn create_file_default(&mut self) -> TempResult<TempFileHandle> {
        self.create_file(&TempOptions::default())
    }

    pub fn create_dir_default(&mut self) -> TempResult<TempDirHandle> {
        self.create_dir(&TempOptions::default())
    }

    /// Removes every tracked resource in creation order.
    ///
    /// Files have their descriptor closed before removal, directories are
    /// removed recursively. Nothing tracked means nothing to do.
    #[debug_ensures(self.tracked.is_empty(), "tracked must be empty after cleanup")]
    pub fn cleanup(&mut self) -> TempResult<()> {
        if self.tracked.is_empty() {
            return Ok(());
        }
        let total = self.tracked.len();
        let mut flag = auto_exit_log!(
            info!(target: "helpful/temp", "cleanup {} temp resources success!", total),
            error!(target: "helpful/temp", "cleanup {} temp resources failed!", total)
        );
        let mut failures = Vec::new();
        for handle in std::mem::take(&mut self.tracked) {
            let kind = handle.kind();
            let path = handle.path().to_path_buf();
            match handle.remove() {
                Ok(()) => {
                    debug!(target: "helpful/temp", "remove temp {kind} {}", path.display());
                }
                Err(e) => {
                    error!(target: "helpful/temp", "remove temp {kind} {} failed: {e}", path.display());
                    failures.push(format!("{}: {e}", path.display()));
                }
            }
        }
        if !failures.is_empty() {
            return TempReason::Cleanup { total, failures }.err_result();
        }
        flag.mark_suc();
        Ok(())
    }

    /// 显式结束作用域，返回清理结果
    pub fn finish(mut self) -> TempResult<()> {
        self.cleanup()
    }
}

impl Drop for TempKeeper {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            error!(target: "helpful/temp", "cleanup on drop failed: {e}");
        }
    }
}
