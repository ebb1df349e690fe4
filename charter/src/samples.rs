use crate::error::RenderError;
use std::path::Path;
use ubench_core::prelude::{cache_file_name, cache_path, Chart, Curve};
use ubench_summary_model::load_sample;

/// Load every trial of `curve`, grouped by thread count in declaration order.
///
/// Samples must have been collected already; a missing one is never re-collected here.
pub(crate) fn load_curve_samples(
    chart: &Chart,
    curve: &Curve,
    data_dir: &Path,
) -> Result<Vec<Vec<f64>>, RenderError> {
    let policy = &chart.run_policy;

    policy
        .thread_counts
        .iter()
        .map(|&thread_count| {
            (0..policy.trial_count)
                .map(|trial_index| {
                    let file_name = cache_file_name(curve, chart, thread_count, trial_index);
                    let path = cache_path(data_dir, &file_name);
                    load_sample(&path).map_err(|source| RenderError::MissingSample { path, source })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}
