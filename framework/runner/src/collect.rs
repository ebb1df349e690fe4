use crate::error::CollectError;
use crate::executor::{BenchmarkExecutor, ProcessExecutor};
use crate::progress::CollectProgress;
use crate::types::CollectResult;
use itertools::Itertools;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;
use ubench_core::prelude::{cache_file_name, cache_path, ensure_dir, BenchmarkCommand, Chart};
use ubench_summary_model::store_sample;

/// What [Collector::collect] did for a chart.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectReport {
    /// Samples produced by running an executable
    pub executed: usize,
    /// Samples already cached and newer than their executable
    pub reused: usize,
}

/// Whether a cached sample can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SampleState {
    Missing,
    /// Older than the executable that should have produced it
    Stale,
    Fresh,
}

/// Makes sure every sample a chart needs is cached and newer than its executable.
///
/// Samples are produced strictly one after another.
pub struct Collector<'a, E> {
    data_dir: &'a Path,
    executable_root: &'a Path,
    executor: E,
    show_progress: bool,
}

impl<'a> Collector<'a, ProcessExecutor> {
    /// Create a collector that writes samples to `data_dir` and resolves executable paths against
    /// `executable_root`.
    pub fn new(data_dir: &'a Path, executable_root: &'a Path) -> Self {
        Self {
            data_dir,
            executable_root,
            executor: ProcessExecutor,
            show_progress: false,
        }
    }
}

impl<'a, E: BenchmarkExecutor> Collector<'a, E> {
    /// Use a different way of running benchmarks.
    pub fn with_executor<F: BenchmarkExecutor>(self, executor: F) -> Collector<'a, F> {
        Collector {
            data_dir: self.data_dir,
            executable_root: self.executable_root,
            executor,
            show_progress: self.show_progress,
        }
    }

    /// Show a progress bar while collecting.
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Collect the data needed to draw `chart`.
    ///
    /// A missing executable, a failing benchmark or unparsable output stops the collection; no
    /// partial results are kept for the sample being produced.
    pub fn collect(&mut self, chart: &Chart) -> CollectResult<CollectReport> {
        ensure_dir(self.data_dir).map_err(|source| CollectError::DataFolder {
            path: self.data_dir.to_path_buf(),
            source,
        })?;

        log::info!("Collecting data for chart {}", chart.name);

        // Every executable must exist before anything runs, its build time is the freshness baseline
        let baselines = chart
            .curves
            .iter()
            .map(|curve| {
                let path = self.executable_root.join(&curve.executable.path);
                modified_time(&path)
                    .map(|built_at| (path.clone(), built_at))
                    .map_err(|source| CollectError::MissingExecutable { path, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let policy = &chart.run_policy;
        let progress = CollectProgress::start(&chart.name, chart.total_samples(), self.show_progress);
        let mut report = CollectReport::default();

        for (curve, (exe_path, built_at)) in chart.curves.iter().zip(baselines) {
            for (trial_index, &thread_count) in
                (0..policy.trial_count).cartesian_product(policy.thread_counts.iter())
            {
                let file_name = cache_file_name(curve, chart, thread_count, trial_index);
                let path = cache_path(self.data_dir, &file_name);

                match sample_state(&path, built_at)? {
                    SampleState::Fresh => {
                        log::debug!("Reusing {file_name}");
                        report.reused += 1;
                    }
                    state => {
                        log::debug!(
                            "Running {} with {thread_count} threads, trial {} ({state:?} sample)",
                            curve.executable.display_name,
                            trial_index + 1
                        );
                        let command = BenchmarkCommand::new(&exe_path, chart, curve, thread_count);
                        let value = self.executor.execute(&command)?;
                        store_sample(&path, value)
                            .map_err(|source| CollectError::WriteSample { path, source })?;
                        report.executed += 1;
                    }
                }

                progress.sample_done();
            }
        }

        progress.finish();
        log::info!(
            "Chart {}: ran {} benchmarks, reused {} cached samples",
            chart.name,
            report.executed,
            report.reused
        );

        Ok(report)
    }
}

/// Decide whether the sample at `path` is still valid for an executable built at `built_at`.
pub(crate) fn sample_state(path: &Path, built_at: SystemTime) -> CollectResult<SampleState> {
    let written_at = match modified_time(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SampleState::Missing),
        Err(source) => {
            return Err(CollectError::CacheMetadata {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if written_at < built_at {
        return Ok(SampleState::Stale);
    }

    if written_at > SystemTime::now() {
        log::warn!(
            "Cache file {} is dated in the future, trusting it anyway",
            path.display()
        );
    }

    Ok(SampleState::Fresh)
}

fn modified_time(path: &Path) -> std::io::Result<SystemTime> {
    std::fs::metadata(path)?.modified()
}

impl CollectReport {
    /// Total number of samples the chart needed.
    pub fn total(&self) -> usize {
        self.executed + self.reused
    }
}
