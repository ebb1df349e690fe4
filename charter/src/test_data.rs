use ubench_core::prelude::{
    Chart, ChartFormat, Curve, DataStructureConfig, ExecutableSpec, LineStyle, RunPolicy,
};

pub(crate) fn sample_chart(trials: u32, threads: Vec<u32>) -> Chart {
    let policy =
        RunPolicy::new("size64_r80", "mario", 5, threads, false, 1, trials, 64, 80).unwrap();
    let curve = |exe: &str, color: &str, pattern: &str, marker: &str, label: &str| {
        Curve::new(
            ExecutableSpec::new(format!("baseline/obj64/{exe}.exe"), exe),
            DataStructureConfig::new(4, 8, 8, 3, 32, "list_default").unwrap(),
            LineStyle::parse(color, pattern, marker).unwrap(),
            label,
        )
    };

    Chart::new(
        vec![
            curve("base_lazylist", "r", "solid", "o", "Lazy List"),
            curve("stmcas_slist", "b", "dashed", "s", "STMCAS List"),
        ],
        policy,
        "Threads",
        "Operations/Second",
        "list_64",
    )
    .unwrap()
}

pub(crate) fn sample_format() -> ChartFormat {
    ChartFormat::new(7, (5.6, 0.5), std::num::NonZeroUsize::new(4).unwrap())
}
