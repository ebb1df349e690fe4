use crate::error::RenderError;
use crate::figure::Figure;
use crate::format::formatter;
use crate::legend::Legend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;
use ubench_core::prelude::{Color as CurveColor, LinePattern, Marker};

/// Chart image size in pixels.
pub(crate) const FIGURE_SIZE: (u32, u32) = (640, 480);

const FONT: &str = "sans-serif";
const FONT_SIZE: u32 = 18;
const LEGEND_FONT_SIZE: u32 = 11;
const STROKE_WIDTH: u32 = 2;
const MARKER_RADIUS: i32 = 4;
const LEGEND_MARKER_RADIUS: i32 = 3;
/// Length of the line sample in front of a legend label
const LEGEND_LINE: i32 = 20;
const LEGEND_PAD: i32 = 4;

type DrawResult = Result<(), Box<dyn Error>>;

pub(crate) fn draw_figure(figure: &Figure, path: &Path) -> Result<(), RenderError> {
    try_draw_figure(figure, path).map_err(|e| RenderError::Draw {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub(crate) fn draw_legend(legend: &Legend, path: &Path) -> Result<(), RenderError> {
    try_draw_legend(legend, path).map_err(|e| RenderError::Draw {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn try_draw_figure(figure: &Figure, path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let y_upper = figure.drawn_y_upper();
    let y_formatter = formatter(figure.y_exponent);

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .build_cartesian_2d(0f64..figure.x_upper, 0f64..y_upper)?;

    // Thread counts are labelled by hand below, the mesh only provides the y axis
    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.15))
        .y_labels(6)
        .y_label_formatter(&y_formatter)
        .y_label_style((FONT, FONT_SIZE).into_font())
        .x_label_formatter(&|_| String::new())
        .x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .axis_desc_style((FONT, FONT_SIZE).into_font())
        .draw()?;

    let tick_style = TextStyle::from((FONT, FONT_SIZE).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    for tick in &figure.x_ticks {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(tick.position, 0.0), (tick.position, y_upper)],
            BLACK.mix(0.15),
        )))?;
        let (x, y) = chart.backend_coord(&(tick.position, 0.0));
        root.draw(&PathElement::new(vec![(x, y), (x, y + 5)], BLACK))?;
        root.draw(&Text::new(tick.label.as_str(), (x, y + 8), tick_style.clone()))?;
    }

    for series in &figure.series {
        let color = rgb(series.style.color);
        let pixels: Vec<(i32, i32)> = series
            .points
            .iter()
            .map(|point| chart.backend_coord(point))
            .collect();

        for segment in dash_segments(&pixels, series.style.pattern) {
            root.draw(&PathElement::new(segment, color.stroke_width(STROKE_WIDTH)))?;
        }

        if let Some(errors) = &series.errors {
            for (&(x, mean), &error) in series.points.iter().zip(errors) {
                // A single trial has no spread to show
                if !error.is_finite() {
                    continue;
                }
                let low = (mean - error).max(0.0);
                let high = (mean + error).min(y_upper);
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(x, low), (x, high)],
                    color.stroke_width(STROKE_WIDTH),
                )))?;
            }
        }

        for &pixel in &pixels {
            draw_marker(&root, pixel, series.style.marker, MARKER_RADIUS, color)?;
        }
    }

    root.present()?;
    Ok(())
}

fn try_draw_legend(legend: &Legend, path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, legend.size).into_drawing_area();
    root.fill(&WHITE)?;

    let label_style =
        TextStyle::from((FONT, LEGEND_FONT_SIZE).into_font()).pos(Pos::new(HPos::Left, VPos::Center));

    for (entry, (x, y)) in legend.entries.iter().zip(legend.slots()) {
        let color = rgb(entry.style.color);
        let line_start = x + LEGEND_PAD;
        let line_end = line_start + LEGEND_LINE;

        for segment in dash_segments(&[(line_start, y), (line_end, y)], entry.style.pattern) {
            root.draw(&PathElement::new(segment, color.stroke_width(STROKE_WIDTH)))?;
        }
        draw_marker(
            &root,
            ((line_start + line_end) / 2, y),
            entry.style.marker,
            LEGEND_MARKER_RADIUS,
            color,
        )?;
        root.draw(&Text::new(
            entry.label.as_str(),
            (line_end + LEGEND_PAD, y),
            label_style.clone(),
        ))?;
    }

    root.present()?;
    Ok(())
}

fn draw_marker<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    at: (i32, i32),
    marker: Marker,
    radius: i32,
    color: RGBColor,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    match marker_polygon(marker, radius) {
        Some(offsets) => area.draw(&(EmptyElement::at(at) + Polygon::new(offsets, color.filled()))),
        None => area.draw(&Circle::new(at, radius, color.filled())),
    }
}

fn rgb(color: CurveColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Vertices of a filled marker, relative to its centre, with y pointing down.
///
/// Circles have no polygon and are drawn as circles.
pub(crate) fn marker_polygon(marker: Marker, radius: i32) -> Option<Vec<(i32, i32)>> {
    let r = f64::from(radius);
    let arm = r / 3.0;
    let plus = [
        (-arm, -r),
        (arm, -r),
        (arm, -arm),
        (r, -arm),
        (r, arm),
        (arm, arm),
        (arm, r),
        (-arm, r),
        (-arm, arm),
        (-r, arm),
        (-r, -arm),
        (-arm, -arm),
    ];

    let points: Vec<(f64, f64)> = match marker {
        Marker::Circle => return None,
        Marker::Square => vec![(-r, -r), (r, -r), (r, r), (-r, r)],
        Marker::Diamond => vec![(0.0, -r), (r, 0.0), (0.0, r), (-r, 0.0)],
        Marker::TriangleUp => vec![(0.0, -r), (r, r), (-r, r)],
        Marker::TriangleDown => vec![(0.0, r), (-r, -r), (r, -r)],
        Marker::Plus => plus.to_vec(),
        Marker::Cross => {
            let (sin, cos) = std::f64::consts::FRAC_PI_4.sin_cos();
            plus.iter()
                .map(|&(x, y)| (x * cos - y * sin, x * sin + y * cos))
                .collect()
        }
        Marker::Star => (0..10)
            .map(|i| {
                let length = if i % 2 == 0 { r } else { r * 0.4 };
                let angle = -std::f64::consts::FRAC_PI_2 + f64::from(i) * std::f64::consts::PI / 5.0;
                (length * angle.cos(), length * angle.sin())
            })
            .collect(),
    };

    Some(
        points
            .into_iter()
            .map(|(x, y)| (x.round() as i32, y.round() as i32))
            .collect(),
    )
}

/// Split a pixel path into the pieces that are inked for `pattern`.
///
/// The pattern carries on across vertices so dashes keep their length around corners.
pub(crate) fn dash_segments(path: &[(i32, i32)], pattern: LinePattern) -> Vec<Vec<(i32, i32)>> {
    let (on, off) = match pattern {
        LinePattern::Solid if path.len() > 1 => return vec![path.to_vec()],
        LinePattern::Solid => return Vec::new(),
        LinePattern::Dashed => (8.0, 5.0),
        LinePattern::Dotted => (2.0, 4.0),
    };

    let mut segments = Vec::new();
    let mut current: Vec<(i32, i32)> = Vec::new();
    let mut inked = true;
    let mut remaining = on;

    for window in path.windows(2) {
        let (start, end) = (window[0], window[1]);
        let (x0, y0) = (f64::from(start.0), f64::from(start.1));
        let (dx, dy) = (f64::from(end.0) - x0, f64::from(end.1) - y0);
        let length = dx.hypot(dy);
        if length == 0.0 {
            continue;
        }

        if inked && current.is_empty() {
            current.push(start);
        }

        let mut travelled = 0.0;
        while length - travelled > remaining {
            travelled += remaining;
            let t = travelled / length;
            let at = ((x0 + dx * t).round() as i32, (y0 + dy * t).round() as i32);
            current.push(at);
            if inked {
                segments.push(std::mem::take(&mut current));
                remaining = off;
            } else {
                remaining = on;
            }
            inked = !inked;
        }
        remaining -= length - travelled;

        if inked {
            current.push(end);
        }
    }

    if current.len() > 1 {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pixel(buffer: &[u8], width: u32, (x, y): (u32, u32)) -> [u8; 3] {
        let i = ((y * width + x) * 3) as usize;
        [buffer[i], buffer[i + 1], buffer[i + 2]]
    }

    #[test]
    fn markers_are_filled_with_the_curve_color() {
        let red = rgb(CurveColor::rgb(200, 0, 0));
        for marker in [Marker::Square, Marker::Circle] {
            let mut buffer = vec![0u8; 20 * 20 * 3];
            {
                let area = BitMapBackend::with_buffer(&mut buffer, (20, 20)).into_drawing_area();
                area.fill(&WHITE).unwrap();
                draw_marker(&area, (10, 10), marker, 4, red).unwrap();
                area.present().unwrap();
            }
            assert_eq!(pixel(&buffer, 20, (10, 10)), [200, 0, 0], "{marker:?}");
            assert_eq!(pixel(&buffer, 20, (1, 1)), [255, 255, 255], "{marker:?}");
        }
    }

    #[test]
    fn curve_color_can_be_faded_and_widened() {
        let color = rgb(CurveColor::rgb(10, 20, 30));
        assert_eq!(color.mix(0.25).3, 0.25);
        assert_eq!(color.stroke_width(3).stroke_width, 3);
    }

    #[test]
    fn solid_line_is_one_segment() {
        let path = vec![(0, 0), (10, 10), (20, 0)];
        assert_eq!(dash_segments(&path, LinePattern::Solid), vec![path.clone()]);
        assert!(dash_segments(&[(0, 0)], LinePattern::Solid).is_empty());
    }

    #[test]
    fn dashes_alternate_along_a_line() {
        let segments = dash_segments(&[(0, 0), (30, 0)], LinePattern::Dashed);
        assert_eq!(
            segments,
            vec![
                vec![(0, 0), (8, 0)],
                vec![(13, 0), (21, 0)],
                vec![(26, 0), (30, 0)],
            ]
        );
    }

    #[test]
    fn dashes_continue_around_corners() {
        let segments = dash_segments(&[(0, 0), (5, 0), (5, 20)], LinePattern::Dashed);
        assert_eq!(
            segments,
            vec![vec![(0, 0), (5, 0), (5, 3)], vec![(5, 8), (5, 16)]]
        );
    }

    #[test]
    fn dots_are_short() {
        let segments = dash_segments(&[(0, 0), (12, 0)], LinePattern::Dotted);
        assert_eq!(segments, vec![vec![(0, 0), (2, 0)], vec![(6, 0), (8, 0)]]);
    }

    #[test]
    fn circle_has_no_polygon() {
        assert_eq!(marker_polygon(Marker::Circle, 4), None);
    }

    #[test]
    fn triangles_point_the_right_way() {
        let up = marker_polygon(Marker::TriangleUp, 4).unwrap();
        assert_eq!(up[0], (0, -4));
        let down = marker_polygon(Marker::TriangleDown, 4).unwrap();
        assert_eq!(down[0], (0, 4));
    }

    #[test]
    fn markers_fit_their_radius() {
        for marker in [
            Marker::Square,
            Marker::Diamond,
            Marker::TriangleUp,
            Marker::TriangleDown,
            Marker::Plus,
            Marker::Cross,
            Marker::Star,
        ] {
            let polygon = marker_polygon(marker, 6).unwrap();
            assert!(polygon.len() >= 3, "{marker:?}");
            for (x, y) in polygon {
                assert!(x.abs() <= 6 && y.abs() <= 6, "{marker:?} vertex ({x}, {y})");
            }
        }
    }

    #[test]
    fn star_alternates_points() {
        let star = marker_polygon(Marker::Star, 10).unwrap();
        assert_eq!(star.len(), 10);
        assert_eq!(star[0], (0, -10));
        assert_eq!(star[5], (0, 4));
    }
}
