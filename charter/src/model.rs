use ubench_summary_model::ThroughputPoint;

/// Statistics over the trials of one curve at one thread count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputStats {
    pub mean: f64,
    /// Bessel-corrected, `NaN` for a single sample
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl ThroughputStats {
    pub fn to_point(self, thread_count: u32) -> ThroughputPoint {
        ThroughputPoint {
            thread_count,
            mean: self.mean,
            std: self.std.is_finite().then_some(self.std),
            min: self.min,
            max: self.max,
        }
    }
}
