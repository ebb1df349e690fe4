use crate::model::{Chart, Curve};
use std::fmt::{Display, Formatter};
use std::path::{Component, Path, PathBuf};
use std::process::Command;

/// The invocation of a benchmark executable for one sample.
///
/// The flags are the executables' command line contract and must not change:
/// `-b` bucket size, `-c` chunk size, `-i` seconds, `-k` key range, `-r` lookup ratio, `-t` threads,
/// `-B` resize threshold, `-o` random fill, `-s` snapshot frequency, `-l` max levels,
/// `-T` fill threads and `-Q` to print a single number and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl BenchmarkCommand {
    pub fn new(executable_path: &Path, chart: &Chart, curve: &Curve, thread_count: u32) -> Self {
        let policy = &chart.run_policy;
        let ds = &curve.ds_config;

        let args = [
            ("-b", ds.bucket_size.to_string()),
            ("-c", ds.chunk_size.to_string()),
            ("-i", policy.duration_seconds.to_string()),
            ("-k", policy.key_range.to_string()),
            ("-r", policy.lookup_ratio_percent.to_string()),
            ("-t", thread_count.to_string()),
            ("-B", ds.resize_threshold.to_string()),
            ("-o", u8::from(policy.fill_is_random).to_string()),
            ("-s", ds.snapshot_frequency.to_string()),
            ("-l", ds.max_levels.to_string()),
            ("-T", policy.fill_thread_count.to_string()),
        ]
        .into_iter()
        .flat_map(|(flag, value)| [flag.to_string(), value])
        .chain(std::iter::once("-Q".to_string()))
        .collect();

        Self {
            program: invocable(executable_path),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// A process command ready to be spawned.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl Display for BenchmarkCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// A bare file name would be looked up on `PATH`, so anchor it to the working directory.
fn invocable(path: &Path) -> PathBuf {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Path::new(".").join(path),
        _ => path.to_path_buf(),
    }
}
