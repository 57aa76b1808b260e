use std::{
    fs::{FileTimes, OpenOptions},
    path::Path,
    time::SystemTime,
};

use log::debug;

/// Unix `touch`: create the file if missing and set its access and
/// modification times to `times` (now when `None`). Existing content is kept.
pub fn touch<P: AsRef<Path>>(path: P, times: Option<SystemTime>) -> std::io::Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let stamp = times.unwrap_or_else(SystemTime::now);
    file.set_times(FileTimes::new().set_accessed(stamp).set_modified(stamp))?;
    debug!(target: "helpful/tools", "touch {}", path.display());
    Ok(())
}

pub fn test_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
