use crate::error::RenderError;
use std::collections::HashMap;
use ubench_core::prelude::ChartFormat;

/// Y axis label formatter that factors out `10^exponent`, so `12_300_000.0` with an exponent of 7
/// reads `1.2x10^7`.
pub fn formatter(exponent: i32) -> impl Fn(&f64) -> String {
    let scale = 10f64.powi(exponent);
    move |value: &f64| format!("{:.1}x10^{exponent}", value / scale)
}

/// Chart formats keyed by chart name.
#[derive(Debug, Clone, Default)]
pub struct FormatTable {
    formats: HashMap<String, ChartFormat>,
}

impl FormatTable {
    pub fn new(formats: HashMap<String, ChartFormat>) -> Self {
        Self { formats }
    }

    /// Format for the named chart. Every chart must have one.
    pub fn get(&self, chart_name: &str) -> Result<&ChartFormat, RenderError> {
        self.formats
            .get(chart_name)
            .ok_or_else(|| RenderError::UnknownFormat {
                chart: chart_name.to_string(),
            })
    }

    pub fn contains(&self, chart_name: &str) -> bool {
        self.formats.contains_key(chart_name)
    }
}

impl FromIterator<(String, ChartFormat)> for FormatTable {
    fn from_iter<T: IntoIterator<Item = (String, ChartFormat)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
