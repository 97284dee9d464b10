use std::fmt::Display;
use std::ops::Range;

use plotters::prelude::*;
use thiserror::Error;

use crate::data::{ProjectedTable, CYCLE_INDEX};

use super::style::{ChartStyle, Metric};

/// Rendered fragment dimensions in pixels.
const CHART_SIZE: (u32, u32) = (960, 520);

/// Errors raised while turning a table into chart markup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("metric column `{0}` is not present in the projected table")]
    MissingMetric(&'static str),

    #[error("chart backend failure: {0}")]
    Backend(String),

    #[error("markup assembly failure: {0}")]
    Markup(#[from] std::fmt::Error),
}

// ---------------------------------------------------------------------------
// Chart Renderer
// ---------------------------------------------------------------------------

/// Draw a single-series line chart of `metric` against `Cycle_Index` and
/// serialize it to an embeddable `<svg>` fragment.
///
/// Pure transformation of `(table, style)` into markup; the table is never
/// mutated. The projection upstream guarantees the metric exists, but the
/// two layers are otherwise decoupled, so absence is still an error here
/// rather than a panic.
pub fn render(
    table: &ProjectedTable,
    metric: Metric,
    style: ChartStyle,
) -> Result<String, RenderError> {
    let series = table
        .series(metric.column_name())
        .ok_or(RenderError::MissingMetric(metric.column_name()))?;
    let cycles = table.cycle_index();

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, CHART_SIZE).into_drawing_area();
        let background = style.theme.background();
        let foreground = style.theme.foreground();

        root.fill(&background).map_err(backend_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                metric.title(),
                ("sans-serif", 22).into_font().color(&foreground),
            )
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(64)
            .build_cartesian_2d(axis_range(cycles), axis_range(series))
            .map_err(backend_err)?;

        chart
            .configure_mesh()
            .x_desc(CYCLE_INDEX)
            .y_desc(metric.column_name())
            .axis_style(foreground)
            .label_style(("sans-serif", 14).into_font().color(&foreground))
            .bold_line_style(foreground.mix(0.15))
            .light_line_style(foreground.mix(0.05))
            .draw()
            .map_err(backend_err)?;

        let points = cycles.iter().copied().zip(series.iter().copied());
        chart
            .draw_series(LineSeries::new(
                points,
                style.line_color.stroke_width(style.line_width),
            ))
            .map_err(backend_err)?;

        root.present().map_err(backend_err)?;
    }

    Ok(buffer)
}

/// Axis range with a little headroom. Falls back to `0..1` for an empty
/// series and pads constant series so plotters never sees a zero-width
/// range.
fn axis_range(values: &[f64]) -> Range<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = if (max - min).abs() < f64::EPSILON {
        0.5
    } else {
        (max - min) * 0.05
    };
    (min - pad)..(max + pad)
}

fn backend_err<E: Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::data::METRIC_COLUMNS;

    use super::*;

    fn sample_table() -> ProjectedTable {
        let series: BTreeMap<String, Vec<f64>> = [
            ("Capacity".to_string(), vec![2.0, 1.9, 1.8]),
            ("Re".to_string(), vec![0.1, 0.2, 0.3]),
            ("Rct".to_string(), vec![1.0, 2.0, 3.0]),
        ]
        .into_iter()
        .collect();
        ProjectedTable::new(vec![1.0, 2.0, 3.0], series)
    }

    #[test]
    fn fragment_is_bare_svg_with_caption() {
        let table = sample_table();
        for metric in Metric::ALL {
            let svg = render(&table, metric, ChartStyle::preset(metric)).expect("render");
            assert!(svg.trim_start().starts_with("<svg"), "not an svg fragment");
            assert!(!svg.contains("<html"), "fragment must not be a document");
            assert!(svg.contains(metric.title()), "caption missing");
        }
    }

    #[test]
    fn empty_table_still_renders_axes() {
        let table = ProjectedTable::new(
            Vec::new(),
            METRIC_COLUMNS
                .iter()
                .map(|c| (c.to_string(), Vec::new()))
                .collect(),
        );
        let svg = render(&table, Metric::Capacity, ChartStyle::preset(Metric::Capacity))
            .expect("render empty");
        assert!(svg.trim_start().starts_with("<svg"));
    }

    #[test]
    fn constant_series_does_not_collapse_the_axis() {
        let series: BTreeMap<String, Vec<f64>> = METRIC_COLUMNS
            .iter()
            .map(|c| (c.to_string(), vec![1.5, 1.5, 1.5]))
            .collect();
        let table = ProjectedTable::new(vec![1.0, 2.0, 3.0], series);
        render(&table, Metric::Re, ChartStyle::preset(Metric::Re)).expect("render flat");
    }

    #[test]
    fn absent_metric_is_a_render_error() {
        // A table missing Rct cannot come out of the preparer; build one by
        // hand to exercise the defensive check.
        let series: BTreeMap<String, Vec<f64>> = [
            ("Capacity".to_string(), vec![2.0]),
            ("Re".to_string(), vec![0.1]),
        ]
        .into_iter()
        .collect();
        let table = ProjectedTable::new(vec![1.0], series);
        let err = render(&table, Metric::Rct, ChartStyle::preset(Metric::Rct)).unwrap_err();
        match err {
            RenderError::MissingMetric(name) => assert_eq!(name, "Rct"),
            other => panic!("expected MissingMetric, got {other:?}"),
        }
    }
}
