use crate::error::CollectError;
use crate::types::CollectResult;
use std::process::Stdio;
use ubench_core::prelude::BenchmarkCommand;

/// Runs one benchmark invocation and returns the throughput it reported.
///
/// Implementations must block until the benchmark has finished. Benchmarks are never run
/// concurrently because they would compete for the same cores.
pub trait BenchmarkExecutor {
    fn execute(&mut self, command: &BenchmarkCommand) -> CollectResult<f64>;
}

impl<E: BenchmarkExecutor + ?Sized> BenchmarkExecutor for &mut E {
    fn execute(&mut self, command: &BenchmarkCommand) -> CollectResult<f64> {
        (**self).execute(command)
    }
}

/// Spawns the benchmark as a child process and reads its quiet-mode output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl BenchmarkExecutor for ProcessExecutor {
    fn execute(&mut self, command: &BenchmarkCommand) -> CollectResult<f64> {
        let output = command
            .to_command()
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| CollectError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CollectError::ExitStatus {
                command: command.to_string(),
                status: output.status,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_sample(&stdout).ok_or_else(|| CollectError::MalformedOutput {
            command: command.to_string(),
            output: stdout.into_owned(),
        })
    }
}

/// The first line of quiet-mode output, as a finite number.
pub(crate) fn parse_sample(output: &str) -> Option<f64> {
    output
        .lines()
        .next()
        .and_then(|line| line.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
