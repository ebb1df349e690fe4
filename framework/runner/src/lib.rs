//! Produces the throughput samples a chart needs.
//!
//! Samples live in a data folder, one file per curve, thread count and trial. A sample is only
//! produced again when it is missing or older than the executable that produced it.

mod collect;
mod error;
mod executor;
mod progress;
mod types;

pub mod prelude {
    pub use crate::collect::{CollectReport, Collector};
    pub use crate::error::CollectError;
    pub use crate::executor::{BenchmarkExecutor, ProcessExecutor};
    pub use crate::types::CollectResult;
}
