use crate::model::ThroughputStats;
use anyhow::Context;
use polars::prelude::*;

pub(crate) fn throughput_stats(samples: &[f64]) -> anyhow::Result<ThroughputStats> {
    anyhow::ensure!(!samples.is_empty(), "No samples to aggregate");

    let frame = df!("throughput" => samples)?;
    let value_series = frame.column("throughput")?.as_materialized_series();

    let mean = value_series.mean().context("Mean")?;
    let std = if samples.len() > 1 {
        value_series.std(1).context("Std")?
    } else {
        f64::NAN
    };
    let min = value_series
        .min::<f64>()
        .context("Min")?
        .context("Missing min")?;
    let max = value_series
        .max::<f64>()
        .context("Max")?
        .context("Missing max")?;

    Ok(ThroughputStats {
        mean,
        std,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn identical_samples_have_no_spread() -> anyhow::Result<()> {
        let stats = throughput_stats(&[1000.0; 10])?;
        assert_close(stats.mean, 1000.0);
        assert_close(stats.std, 0.0);
        assert_close(stats.min, 1000.0);
        assert_close(stats.max, 1000.0);
        Ok(())
    }

    #[test]
    fn std_is_bessel_corrected() -> anyhow::Result<()> {
        let stats = throughput_stats(&[1.0, 2.0, 3.0, 4.0])?;
        assert_close(stats.mean, 2.5);
        assert_close(stats.std, (5.0f64 / 3.0).sqrt());
        assert_close(stats.min, 1.0);
        assert_close(stats.max, 4.0);
        Ok(())
    }

    #[test]
    fn single_sample_std_is_nan() -> anyhow::Result<()> {
        let stats = throughput_stats(&[42.0])?;
        assert_close(stats.mean, 42.0);
        assert!(stats.std.is_nan());
        assert!(stats.to_point(1).std.is_none());
        Ok(())
    }

    #[test]
    fn empty_samples_are_rejected() {
        assert!(throughput_stats(&[]).is_err());
    }
}
