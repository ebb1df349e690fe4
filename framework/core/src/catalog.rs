use crate::error::CatalogError;
use crate::format::ChartFormat;
use crate::model::{Chart, Curve, DataStructureConfig, ExecutableSpec, RunPolicy};
use crate::style::LineStyle;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The declarative description of every experiment and chart.
///
/// Registries are keyed by a short name that curve sets and charts refer to. For example:
///
/// ```toml
/// machine = "mario"
///
/// [executables.base_lazylist]
/// path = "baseline/obj64/lazylist_omap.exe"
/// name = "base_lazylist"
///
/// [data_structures.list_default]
/// bucket_size = 4
/// chunk_size = 8
/// resize_threshold = 8
/// snapshot_frequency = 3
/// max_levels = 32
/// name = "list_default"
///
/// [run_policies.size64_r80]
/// key_range = 64
/// lookup_ratio = 80
///
/// [line_styles.red]
/// color = "r"
/// line_style = "solid"
/// marker = "o"
///
/// [[curve_sets.list_64]]
/// executable = "base_lazylist"
/// data_structure = "list_default"
/// style = "red"
/// label = "Lazy List"
///
/// [[charts]]
/// name = "list_64"
/// curves = "list_64"
/// run_policy = "size64_r80"
/// x_label = "Threads"
/// y_label = "Operations/Second"
///
/// [formats.list_64]
/// exponent = 7
/// legend_size = [5.6, 0.5]
/// legend_columns = 4
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Mnemonic for the machine the experiments run on
    pub machine: String,
    #[serde(default)]
    pub defaults: RunDefaults,
    #[serde(default)]
    pub executables: HashMap<String, ExecutableEntry>,
    #[serde(default)]
    pub data_structures: HashMap<String, DataStructureEntry>,
    #[serde(default)]
    pub run_policies: HashMap<String, RunPolicyEntry>,
    #[serde(default)]
    pub line_styles: HashMap<String, LineStyleEntry>,
    #[serde(default)]
    pub curve_sets: HashMap<String, Vec<CurveEntry>>,
    #[serde(default)]
    pub charts: Vec<ChartEntry>,
    /// Presentation settings keyed by chart name
    #[serde(default)]
    pub formats: HashMap<String, ChartFormat>,
}

/// Run settings shared by every run policy unless the policy overrides them.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunDefaults {
    pub seconds: u32,
    pub threads: Vec<u32>,
    pub fill_threads: u32,
    pub trials: u32,
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            seconds: 5,
            threads: vec![1, 12, 24, 48, 96],
            fill_threads: 1,
            trials: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutableEntry {
    pub path: PathBuf,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataStructureEntry {
    pub bucket_size: u64,
    pub chunk_size: u64,
    pub resize_threshold: u64,
    pub snapshot_frequency: u64,
    pub max_levels: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunPolicyEntry {
    pub key_range: u64,
    pub lookup_ratio: u8,
    #[serde(default)]
    pub fill_random: bool,
    pub seconds: Option<u32>,
    pub threads: Option<Vec<u32>>,
    pub fill_threads: Option<u32>,
    pub trials: Option<u32>,
    /// Base name of the policy, defaults to the registry key
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineStyleEntry {
    pub color: String,
    pub line_style: String,
    pub marker: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveEntry {
    pub executable: String,
    pub data_structure: String,
    pub style: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartEntry {
    pub name: String,
    pub curves: String,
    pub run_policy: String,
    pub x_label: String,
    pub y_label: String,
}

impl Catalog {
    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Replace the machine tag used to name run policies.
    pub fn with_machine(mut self, machine: impl Into<String>) -> Self {
        self.machine = machine.into();
        self
    }

    /// Resolve every chart, in declaration order.
    pub fn charts(&self) -> Result<Vec<Chart>, CatalogError> {
        self.charts.iter().map(|entry| self.chart(entry)).collect()
    }

    fn chart(&self, entry: &ChartEntry) -> Result<Chart, CatalogError> {
        let referenced_by = format!("chart '{}'", entry.name);

        let curve_entries = lookup(&self.curve_sets, "curve set", &entry.curves, &referenced_by)?;
        let curves = curve_entries
            .iter()
            .enumerate()
            .map(|(index, curve)| {
                self.curve(curve, &format!("curve set '{}' entry {}", entry.curves, index + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let run_policy = self.run_policy(&entry.run_policy, &referenced_by)?;

        Ok(Chart::new(
            curves,
            run_policy,
            entry.x_label.clone(),
            entry.y_label.clone(),
            entry.name.clone(),
        )?)
    }

    fn curve(&self, entry: &CurveEntry, referenced_by: &str) -> Result<Curve, CatalogError> {
        let exe = lookup(&self.executables, "executable", &entry.executable, referenced_by)?;
        let ds = lookup(
            &self.data_structures,
            "data structure",
            &entry.data_structure,
            referenced_by,
        )?;
        let style = lookup(&self.line_styles, "line style", &entry.style, referenced_by)?;

        Ok(Curve::new(
            ExecutableSpec::new(exe.path.clone(), exe.name.clone()),
            DataStructureConfig::new(
                ds.bucket_size,
                ds.chunk_size,
                ds.resize_threshold,
                ds.snapshot_frequency,
                ds.max_levels,
                ds.name.clone(),
            )?,
            LineStyle::parse(&style.color, &style.line_style, &style.marker)?,
            entry.label.clone(),
        ))
    }

    fn run_policy(&self, key: &str, referenced_by: &str) -> Result<RunPolicy, CatalogError> {
        let entry = lookup(&self.run_policies, "run policy", key, referenced_by)?;
        let defaults = &self.defaults;

        Ok(RunPolicy::new(
            entry.name.as_deref().unwrap_or(key),
            &self.machine,
            entry.seconds.unwrap_or(defaults.seconds),
            entry
                .threads
                .clone()
                .unwrap_or_else(|| defaults.threads.clone()),
            entry.fill_random,
            entry.fill_threads.unwrap_or(defaults.fill_threads),
            entry.trials.unwrap_or(defaults.trials),
            entry.key_range,
            entry.lookup_ratio,
        )?)
    }
}

fn lookup<'a, T>(
    registry: &'a HashMap<String, T>,
    kind: &'static str,
    key: &str,
    referenced_by: &str,
) -> Result<&'a T, CatalogError> {
    registry
        .get(key)
        .ok_or_else(|| CatalogError::UnknownReference {
            kind,
            key: key.to_string(),
            referenced_by: referenced_by.to_string(),
        })
}
