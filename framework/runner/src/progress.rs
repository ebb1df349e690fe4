use indicatif::{ProgressBar, ProgressStyle};

/// Displays how many samples of a chart have been checked or produced.
pub(crate) struct CollectProgress {
    bar: ProgressBar,
}

impl CollectProgress {
    pub(crate) fn start(chart_name: &str, total_samples: usize, visible: bool) -> Self {
        if !visible {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(total_samples as u64);
        match ProgressStyle::with_template(
            "{spinner:.green} {prefix} [{wide_bar:.cyan/blue}] {pos}/{len} samples [{elapsed_precise}]",
        ) {
            Ok(style) => bar.set_style(style.progress_chars("#>-")),
            Err(e) => log::warn!("Failed to set progress style: {e}"),
        }
        bar.set_prefix(chart_name.to_string());

        Self { bar }
    }

    pub(crate) fn sample_done(&self) {
        self.bar.inc(1);
    }

    pub(crate) fn finish(self) {
        self.bar.finish_and_clear();
    }
}
