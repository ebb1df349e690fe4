use std::num::NonZeroUsize;
use std::path::Path;
use ubench_charter::{chart_stats, output_names, render, FormatTable, RenderError};
use ubench_core::prelude::{
    cache_file_name, Chart, ChartFormat, Curve, DataStructureConfig, ExecutableSpec, LineStyle,
    RunPolicy,
};
use ubench_summary_model::store_sample;

fn chart(trials: u32, threads: Vec<u32>) -> Chart {
    let policy =
        RunPolicy::new("size64_r80", "mario", 5, threads, false, 1, trials, 64, 80).unwrap();
    let curve = |exe: &str, style: LineStyle| {
        Curve::new(
            ExecutableSpec::new(format!("baseline/obj64/{exe}.exe"), exe),
            DataStructureConfig::new(4, 8, 8, 3, 32, "list_default").unwrap(),
            style,
            exe,
        )
    };
    Chart::new(
        vec![
            curve("base_lazylist", LineStyle::parse("r", "solid", "o").unwrap()),
            curve("stmcas_slist", LineStyle::parse("g", "dotted", "*").unwrap()),
        ],
        policy,
        "Threads",
        "Operations/Second",
        "list_64",
    )
    .unwrap()
}

fn formats() -> FormatTable {
    [(
        "list_64".to_string(),
        ChartFormat::new(7, (5.6, 0.5), NonZeroUsize::new(4).unwrap()),
    )]
    .into_iter()
    .collect()
}

fn fill_samples(chart: &Chart, data_dir: &Path, value: impl Fn(usize, u32, u32) -> f64) {
    for (curve_index, curve) in chart.curves.iter().enumerate() {
        for &threads in &chart.run_policy.thread_counts {
            for trial in 0..chart.run_policy.trial_count {
                let name = cache_file_name(curve, chart, threads, trial);
                store_sample(&data_dir.join(name), value(curve_index, threads, trial)).unwrap();
            }
        }
    }
}

#[test]
fn constant_samples_have_zero_spread() {
    let data_dir = tempfile::tempdir().unwrap();
    let chart = chart(10, vec![1, 12, 24, 48, 96]);
    fill_samples(&chart, data_dir.path(), |_, _, _| 1000.0);

    let stats = chart_stats(&chart, data_dir.path()).unwrap();

    assert_eq!(stats.len(), 2);
    for point in stats.iter().flatten() {
        assert!((point.mean - 1000.0).abs() < 1e-9);
        assert!(point.std.abs() < 1e-9);
    }
}

#[test]
fn missing_sample_stops_rendering() {
    let data_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let chart = chart(2, vec![1, 12]);
    fill_samples(&chart, data_dir.path(), |_, _, _| 1.0);
    std::fs::remove_file(
        data_dir
            .path()
            .join(cache_file_name(&chart.curves[1], &chart, 12, 1)),
    )
    .unwrap();

    let err = render(&chart, data_dir.path(), output_dir.path(), false, &formats()).unwrap_err();

    assert!(matches!(err, RenderError::MissingSample { .. }), "{err}");
    assert!(!output_dir.path().join("list_64.png").exists());
}

#[test]
fn unknown_format_stops_rendering() {
    let data_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let chart = chart(1, vec![1]);
    fill_samples(&chart, data_dir.path(), |_, _, _| 1.0);

    let err = render(
        &chart,
        data_dir.path(),
        output_dir.path(),
        false,
        &FormatTable::default(),
    )
    .unwrap_err();

    assert!(matches!(err, RenderError::UnknownFormat { .. }));
}

#[test]
fn output_names_depend_on_error_bars() {
    assert_eq!(
        output_names("sl_1M", false),
        ("sl_1M.png".to_string(), "sl_1M_legend.png".to_string())
    );
    assert_eq!(
        output_names("sl_1M", true),
        (
            "sl_1M_variance.png".to_string(),
            "sl_1M_variance_legend.png".to_string()
        )
    );
}

// Drawing text needs a system font
#[test]
#[ignore]
fn renders_chart_legend_and_summary() {
    let data_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let chart = chart(3, vec![1, 12, 24]);
    fill_samples(&chart, data_dir.path(), |curve, threads, trial| {
        (curve as f64 + 1.0) * f64::from(threads) * 1e6 + f64::from(trial)
    });

    let summary = render(&chart, data_dir.path(), output_dir.path(), false, &formats()).unwrap();
    render(&chart, data_dir.path(), output_dir.path(), true, &formats()).unwrap();

    for name in [
        "list_64.png",
        "list_64_legend.png",
        "list_64_variance.png",
        "list_64_variance_legend.png",
        "list_64_summary.json",
    ] {
        assert!(output_dir.path().join(name).exists(), "{name}");
    }
    assert_eq!(summary.curves.len(), 2);
}

// Drawing text needs a system font
#[test]
#[ignore]
fn renders_single_trial_with_error_bars() {
    let data_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let chart = chart(1, vec![1, 12]);
    fill_samples(&chart, data_dir.path(), |_, _, _| 5.0);

    let summary = render(&chart, data_dir.path(), output_dir.path(), true, &formats()).unwrap();

    assert!(summary.curves[0].points.iter().all(|p| p.std.is_none()));
    assert!(output_dir.path().join("list_64_variance.png").exists());
}
