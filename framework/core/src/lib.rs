//! Configuration model for the ubench harness.
//!
//! Everything here is an immutable value built once from the catalog and passed by reference to
//! the collector and the charter.

mod catalog;
mod command;
mod error;
mod format;
mod fs;
mod model;
mod naming;
mod style;

pub mod prelude {
    pub use crate::catalog::{
        Catalog, ChartEntry, CurveEntry, DataStructureEntry, ExecutableEntry, LineStyleEntry,
        RunDefaults, RunPolicyEntry,
    };
    pub use crate::command::BenchmarkCommand;
    pub use crate::error::{CatalogError, ModelError};
    pub use crate::format::{ChartFormat, ThreadAxis};
    pub use crate::fs::ensure_dir;
    pub use crate::model::{Chart, Curve, DataStructureConfig, ExecutableSpec, RunPolicy};
    pub use crate::naming::{cache_file_name, cache_path};
    pub use crate::style::{Color, LinePattern, LineStyle, Marker};
}
