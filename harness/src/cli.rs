use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Catalog of executables, run policies and charts.
    #[arg(long, default_value = "targets.toml")]
    pub catalog: PathBuf,

    /// Folder holding one cached sample per file.
    #[arg(long, default_value = "./data/")]
    pub data_dir: PathBuf,

    /// Destination folder for charts without error bars.
    #[arg(long, default_value = "./charts/")]
    pub chart_dir: PathBuf,

    /// Destination folder for charts with error bars.
    #[arg(long, default_value = "./variance/")]
    pub variance_dir: PathBuf,

    /// Folder the benchmark executable paths are relative to.
    #[arg(long, default_value = "../ubench/")]
    pub ubench_dir: PathBuf,

    /// Only produce the named chart. May be given more than once.
    #[arg(long = "chart", value_name = "NAME")]
    pub charts: Vec<String>,

    /// Machine tag appended to run policy names, overrides the one in the catalog.
    #[arg(long, env = "UBENCH_MACHINE")]
    pub machine: Option<String>,

    /// Do not show a progress bar while collecting samples.
    #[arg(long)]
    pub no_progress: bool,
}
