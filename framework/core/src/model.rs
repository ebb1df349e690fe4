use crate::error::ModelError;
use crate::style::LineStyle;
use std::path::PathBuf;

/// Description of a benchmark executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableSpec {
    /// Path of the executable, relative to the executable root folder.
    pub path: PathBuf,
    /// Name associated with the executable, used in cache file names.
    pub display_name: String,
}

impl ExecutableSpec {
    pub fn new(path: impl Into<PathBuf>, display_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            display_name: display_name.into(),
        }
    }
}

/// How to configure the data structure inside a benchmark executable.
///
/// The same executable may appear twice on a chart with different configurations, so the
/// configuration name is part of every cache file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStructureConfig {
    /// Initial number of buckets
    pub bucket_size: u64,
    /// Initial size of chunks
    pub chunk_size: u64,
    /// Number of elements before a resize should happen
    pub resize_threshold: u64,
    /// How often snapshots are taken
    pub snapshot_frequency: u64,
    /// Maximum number of levels
    pub max_levels: u64,
    /// Name for this configuration, used in cache file names
    pub name: String,
}

impl DataStructureConfig {
    pub fn new(
        bucket_size: u64,
        chunk_size: u64,
        resize_threshold: u64,
        snapshot_frequency: u64,
        max_levels: u64,
        name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        for (field, value) in [
            ("bucket size", bucket_size),
            ("chunk size", chunk_size),
            ("resize threshold", resize_threshold),
            ("snapshot frequency", snapshot_frequency),
            ("max levels", max_levels),
        ] {
            if value == 0 {
                return Err(ModelError::ZeroDataStructureParameter { name, field });
            }
        }

        Ok(Self {
            bucket_size,
            chunk_size,
            resize_threshold,
            snapshot_frequency,
            max_levels,
            name,
        })
    }
}

/// Rules for running the trials of an experiment.
///
/// Every curve on a chart is measured with the same policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPolicy {
    /// Seconds for which each benchmark invocation runs
    pub duration_seconds: u32,
    /// Thread counts to measure, strictly increasing
    pub thread_counts: Vec<u32>,
    /// Prefill in random order rather than in sequence
    pub fill_is_random: bool,
    /// Number of threads used to prefill the data structure
    pub fill_thread_count: u32,
    /// Number of trials averaged per thread count
    pub trial_count: u32,
    /// Range of keys used by the benchmark
    pub key_range: u64,
    /// Percentage of operations that are lookups
    pub lookup_ratio_percent: u8,
    /// Mnemonic for the machine the experiments run on
    pub machine_tag: String,
    name: String,
}

impl RunPolicy {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        basename: &str,
        machine_tag: &str,
        duration_seconds: u32,
        thread_counts: Vec<u32>,
        fill_is_random: bool,
        fill_thread_count: u32,
        trial_count: u32,
        key_range: u64,
        lookup_ratio_percent: u8,
    ) -> Result<Self, ModelError> {
        let name = format!("{basename}_{machine_tag}");

        if trial_count == 0 {
            return Err(ModelError::NoTrials { name });
        }
        if thread_counts.is_empty() {
            return Err(ModelError::NoThreadCounts { name });
        }
        if thread_counts[0] == 0 || thread_counts.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ModelError::UnorderedThreadCounts {
                name,
                thread_counts,
            });
        }

        let invalid = [
            ("duration", duration_seconds as u64, duration_seconds == 0),
            (
                "fill thread count",
                fill_thread_count as u64,
                fill_thread_count == 0,
            ),
            ("key range", key_range, key_range == 0),
            (
                "lookup ratio",
                lookup_ratio_percent as u64,
                lookup_ratio_percent > 100,
            ),
        ]
        .into_iter()
        .find(|(_, _, invalid)| *invalid);
        if let Some((field, value, _)) = invalid {
            return Err(ModelError::InvalidRunParameter { name, field, value });
        }

        Ok(Self {
            duration_seconds,
            thread_counts,
            fill_is_random,
            fill_thread_count,
            trial_count,
            key_range,
            lookup_ratio_percent,
            machine_tag: machine_tag.to_string(),
            name,
        })
    }

    /// The policy name, `<basename>_<machine tag>`, used in cache file names.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The largest thread count measured by this policy.
    pub fn max_thread_count(&self) -> u32 {
        // Non-empty and increasing by construction
        self.thread_counts[self.thread_counts.len() - 1]
    }

    /// Total number of samples a single curve needs under this policy.
    pub fn samples_per_curve(&self) -> usize {
        self.thread_counts.len() * self.trial_count as usize
    }
}

/// One plotted series: an executable, its data structure configuration and how to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub executable: ExecutableSpec,
    pub ds_config: DataStructureConfig,
    pub style: LineStyle,
    pub label: String,
}

impl Curve {
    pub fn new(
        executable: ExecutableSpec,
        ds_config: DataStructureConfig,
        style: LineStyle,
        label: impl Into<String>,
    ) -> Self {
        Self {
            executable,
            ds_config,
            style,
            label: label.into(),
        }
    }

    /// The part of a cache file name contributed by this curve.
    pub fn cache_prefix(&self) -> String {
        format!("{}_{}", self.executable.display_name, self.ds_config.name)
    }
}

/// Everything needed to run the experiments for, and draw, a single chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Curves in plot and legend order
    pub curves: Vec<Curve>,
    pub run_policy: RunPolicy,
    pub x_label: String,
    pub y_label: String,
    /// Output file stem and key into the chart format table
    pub name: String,
}

impl Chart {
    pub fn new(
        curves: Vec<Curve>,
        run_policy: RunPolicy,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if curves.is_empty() {
            return Err(ModelError::EmptyChart { name });
        }

        let mut prefixes = std::collections::HashSet::with_capacity(curves.len());
        for curve in &curves {
            let prefix = curve.cache_prefix();
            if !prefixes.insert(prefix.clone()) {
                return Err(ModelError::DuplicateCurve {
                    chart: name,
                    prefix,
                });
            }
        }

        Ok(Self {
            curves,
            run_policy,
            x_label: x_label.into(),
            y_label: y_label.into(),
            name,
        })
    }

    /// Total number of samples this chart needs.
    pub fn total_samples(&self) -> usize {
        self.curves.len() * self.run_policy.samples_per_curve()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_policy(trials: u32, threads: Vec<u32>) -> RunPolicy {
        RunPolicy::new("size64_r80", "mario", 5, threads, false, 1, trials, 64, 80)
            .expect("valid policy")
    }

    pub(crate) fn sample_curve(exe: &str, ds: &str) -> Curve {
        Curve::new(
            ExecutableSpec::new(format!("baseline/obj64/{exe}.exe"), exe),
            DataStructureConfig::new(4, 8, 8, 3, 32, ds).expect("valid ds config"),
            LineStyle::parse("r", "solid", "o").expect("valid style"),
            exe,
        )
    }

    #[test]
    fn run_policy_name_includes_machine() {
        let policy = sample_policy(10, vec![1, 12, 24, 48, 96]);
        assert_eq!(policy.name(), "size64_r80_mario");
        assert_eq!(policy.max_thread_count(), 96);
        assert_eq!(policy.samples_per_curve(), 50);
    }

    #[test]
    fn run_policy_rejects_zero_trials() {
        let result = RunPolicy::new("p", "m", 5, vec![1], false, 1, 0, 64, 0);
        assert_eq!(
            result,
            Err(ModelError::NoTrials {
                name: "p_m".to_string()
            })
        );
    }

    #[test]
    fn run_policy_rejects_empty_or_unordered_threads() {
        assert!(matches!(
            RunPolicy::new("p", "m", 5, vec![], false, 1, 1, 64, 0),
            Err(ModelError::NoThreadCounts { .. })
        ));
        assert!(matches!(
            RunPolicy::new("p", "m", 5, vec![1, 12, 12], false, 1, 1, 64, 0),
            Err(ModelError::UnorderedThreadCounts { .. })
        ));
        assert!(matches!(
            RunPolicy::new("p", "m", 5, vec![0, 1], false, 1, 1, 64, 0),
            Err(ModelError::UnorderedThreadCounts { .. })
        ));
    }

    #[test]
    fn run_policy_rejects_lookup_ratio_over_100() {
        let result = RunPolicy::new("p", "m", 5, vec![1], false, 1, 1, 64, 101);
        assert!(matches!(
            result,
            Err(ModelError::InvalidRunParameter {
                field: "lookup ratio",
                value: 101,
                ..
            })
        ));
    }

    #[test]
    fn data_structure_config_rejects_zero_sizes() {
        let result = DataStructureConfig::new(4, 0, 8, 3, 32, "list_default");
        assert!(matches!(
            result,
            Err(ModelError::ZeroDataStructureParameter {
                field: "chunk size",
                ..
            })
        ));
    }

    #[test]
    fn chart_rejects_colliding_curves() {
        let result = Chart::new(
            vec![
                sample_curve("stmcas_slist", "list_default"),
                sample_curve("stmcas_slist", "list_default"),
            ],
            sample_policy(1, vec![1]),
            "Threads",
            "Operations/Second",
            "list_64",
        );
        assert_eq!(
            result,
            Err(ModelError::DuplicateCurve {
                chart: "list_64".to_string(),
                prefix: "stmcas_slist_list_default".to_string(),
            })
        );
    }

    #[test]
    fn chart_allows_same_executable_with_different_configs() {
        let chart = Chart::new(
            vec![
                sample_curve("stmcas_slist", "list_default"),
                sample_curve("stmcas_slist", "list_nosnap"),
            ],
            sample_policy(2, vec![1, 12]),
            "Threads",
            "Operations/Second",
            "list_64",
        )
        .expect("valid chart");
        assert_eq!(chart.total_samples(), 8);
    }

    #[test]
    fn chart_rejects_no_curves() {
        let result = Chart::new(vec![], sample_policy(1, vec![1]), "x", "y", "empty");
        assert!(matches!(result, Err(ModelError::EmptyChart { .. })));
    }
}
