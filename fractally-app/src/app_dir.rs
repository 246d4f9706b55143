//! Location of `preferences.json`: the viewer keeps its window size and
//! wheel settle delay beside the `fractally` binary.

use std::path::PathBuf;

/// Folder holding the `fractally` executable, or the working directory when
/// the executable path cannot be resolved.
pub(crate) fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}
