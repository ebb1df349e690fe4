use clap::Parser;
use ubench_harness::cli::CliArgs;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    log::debug!("Running with {args:?}");

    ubench_harness::run(&args)
}
