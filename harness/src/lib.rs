//! Collect, then draw, every chart of a catalog.

pub mod cli;

use crate::cli::CliArgs;
use anyhow::Context;
use std::collections::HashSet;
use ubench_charter::{render, summary_table, FormatTable};
use ubench_core::prelude::{Catalog, Chart};
use ubench_runner::prelude::Collector;

/// Resolve the catalog into charts and their formats.
///
/// Every chart must have a format, this is checked before any benchmark runs.
pub fn load_charts(args: &CliArgs) -> anyhow::Result<(Vec<Chart>, FormatTable)> {
    let mut catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
    if let Some(machine) = &args.machine {
        log::info!("Using machine tag {machine}");
        catalog = catalog.with_machine(machine.clone());
    }

    let charts = select_charts(catalog.charts()?, &args.charts)?;
    let formats: FormatTable = catalog.formats.into_iter().collect();

    for chart in &charts {
        formats.get(&chart.name)?;
    }

    Ok((charts, formats))
}

/// Keep the charts named in `names`, or all of them if `names` is empty.
pub fn select_charts(charts: Vec<Chart>, names: &[String]) -> anyhow::Result<Vec<Chart>> {
    if names.is_empty() {
        return Ok(charts);
    }

    let known = charts.iter().map(|c| c.name.as_str()).collect::<HashSet<_>>();
    if let Some(unknown) = names.iter().find(|n| !known.contains(n.as_str())) {
        anyhow::bail!("Unknown chart '{unknown}'");
    }

    Ok(charts
        .into_iter()
        .filter(|c| names.contains(&c.name))
        .collect())
}

/// Collect the data for `chart`, then draw it without and with error bars.
pub fn produce_chart(chart: &Chart, args: &CliArgs, formats: &FormatTable) -> anyhow::Result<()> {
    let report = Collector::new(&args.data_dir, &args.ubench_dir)
        .show_progress(!args.no_progress)
        .collect(chart)
        .with_context(|| format!("Failed to collect data for chart {}", chart.name))?;
    log::debug!("Collected {} samples for {}", report.total(), chart.name);

    let summary = render(chart, &args.data_dir, &args.chart_dir, false, formats)
        .with_context(|| format!("Failed to render chart {}", chart.name))?;
    println!("\n{}", chart.name);
    println!("{}", summary_table(&summary, formats.get(&chart.name)?.exponent));

    render(chart, &args.data_dir, &args.variance_dir, true, formats)
        .with_context(|| format!("Failed to render chart {} with error bars", chart.name))?;

    Ok(())
}

pub fn run(args: &CliArgs) -> anyhow::Result<()> {
    let (charts, formats) = load_charts(args)?;
    log::info!("Producing {} charts", charts.len());

    for chart in &charts {
        produce_chart(chart, args, &formats)?;
    }

    Ok(())
}
