use crate::format::formatter;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use ubench_summary_model::ChartSummary;

#[derive(Tabled)]
struct ThroughputRow {
    #[tabled(rename = "Curve")]
    label: String,
    #[tabled(rename = "Threads")]
    thread_count: u32,
    #[tabled(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Std", display = "std_or_dash")]
    std: Option<f64>,
    #[tabled(rename = "Min", display = "float2")]
    min: f64,
    #[tabled(rename = "Max", display = "float2")]
    max: f64,
}

fn float2(n: &f64) -> String {
    format!("{:.2}", n)
}

fn std_or_dash(std: &Option<f64>) -> String {
    std.map(|s| float2(&s)).unwrap_or_else(|| "-".to_string())
}

/// Mean throughput per curve and thread count, ready to print.
///
/// Means use the same scale as the chart's y axis.
pub fn summary_table(summary: &ChartSummary, exponent: i32) -> String {
    let scaled = formatter(exponent);
    let rows = summary
        .curves
        .iter()
        .flat_map(|curve| {
            let scaled = &scaled;
            curve.points.iter().map(move |point| ThroughputRow {
                label: curve.label.clone(),
                thread_count: point.thread_count,
                mean: scaled(&point.mean),
                std: point.std,
                min: point.min,
                max: point.max,
            })
        })
        .collect::<Vec<_>>();

    let mut table = Table::new(&rows);
    table.with(Style::modern());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ubench_summary_model::{CurveSummary, ThroughputPoint};

    #[test]
    fn one_row_per_point() {
        let mut summary = ChartSummary::new("list_64".to_string(), "p".to_string(), vec![1, 12], 2);
        summary.add_curve(CurveSummary {
            label: "Lazy List".to_string(),
            executable: "base_lazylist".to_string(),
            ds_config: "list_default".to_string(),
            points: vec![
                ThroughputPoint {
                    thread_count: 1,
                    mean: 20_000_000.0,
                    std: Some(1.5),
                    min: 19_000_000.0,
                    max: 21_000_000.0,
                },
                ThroughputPoint {
                    thread_count: 12,
                    mean: 40_000_000.0,
                    std: None,
                    min: 40_000_000.0,
                    max: 40_000_000.0,
                },
            ],
        });

        let table = summary_table(&summary, 7);

        assert!(table.contains("Curve"));
        assert!(table.contains("2.0x10^7"));
        assert!(table.contains("4.0x10^7"));
        assert!(table.contains("1.50"));
        assert_eq!(table.matches("Lazy List").count(), 2);
    }
}
