use crate::model::{Chart, Curve};
use std::path::{Path, PathBuf};

/// Name of the cache file holding one sample.
///
/// The name joins the executable display name, the data structure configuration name, the run
/// policy name, the thread count and the trial number with `_`. `trial_index` is the 0-based
/// iteration index; the encoded trial number is 1-based.
pub fn cache_file_name(curve: &Curve, chart: &Chart, thread_count: u32, trial_index: u32) -> String {
    format!(
        "{}_{}_{}_{}",
        curve.cache_prefix(),
        chart.run_policy.name(),
        thread_count,
        trial_index + 1
    )
}

/// Full path of a cache file. The folder must already exist.
pub fn cache_path(folder: &Path, file_name: &str) -> PathBuf {
    folder.join(file_name)
}
