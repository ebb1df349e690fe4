use crate::draw::draw_legend;
use crate::error::RenderError;
use std::path::Path;
use ubench_core::prelude::{ChartFormat, LineStyle};

/// Legend images are laid out at this resolution.
pub(crate) const PIXELS_PER_INCH: f64 = 100.0;
/// Height of one legend row, in pixels.
pub(crate) const ROW_HEIGHT: i32 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub style: LineStyle,
}

/// The labels and styles of a figure, drawn as an image of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub columns: usize,
    /// Image size in pixels
    pub size: (u32, u32),
}

impl Legend {
    pub(crate) fn new(entries: Vec<(String, LineStyle)>, format: &ChartFormat) -> Self {
        let (width, height) = format.legend_size;
        Self {
            entries: entries
                .into_iter()
                .map(|(label, style)| LegendEntry { label, style })
                .collect(),
            columns: format.legend_columns.get(),
            size: (to_pixels(width), to_pixels(height)),
        }
    }

    /// Top left corner of every entry, vertically centred on its row.
    pub fn slots(&self) -> Vec<(i32, i32)> {
        legend_slots(self.entries.len(), self.columns, self.size)
    }

    pub fn save_png(self, path: &Path) -> Result<(), RenderError> {
        log::debug!("Drawing legend to {}", path.display());
        draw_legend(&self, path)
    }
}

fn to_pixels(inches: f64) -> u32 {
    (inches * PIXELS_PER_INCH).round().max(1.0) as u32
}

/// Column-major layout: earlier columns take one extra entry when the count does not divide evenly.
pub(crate) fn legend_slots(count: usize, columns: usize, size: (u32, u32)) -> Vec<(i32, i32)> {
    if count == 0 {
        return Vec::new();
    }

    let columns = columns.max(1);
    let (base, extra) = (count / columns, count % columns);
    let rows = base + usize::from(extra > 0);

    let column_width = size.0 as i32 / columns as i32;
    let top = (size.1 as i32 - rows as i32 * ROW_HEIGHT) / 2;

    (0..columns)
        .flat_map(|column| {
            let in_column = base + usize::from(column < extra);
            (0..in_column).map(move |row| {
                (
                    column as i32 * column_width,
                    top + row as i32 * ROW_HEIGHT + ROW_HEIGHT / 2,
                )
            })
        })
        .collect()
}
