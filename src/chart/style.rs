use plotters::style::colors::{GREEN, WHITE};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Metric – which series a chart plots
// ---------------------------------------------------------------------------

/// The three plotted metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Re,
    Rct,
    Capacity,
}

impl Metric {
    /// All metrics in page order.
    pub const ALL: [Metric; 3] = [Metric::Re, Metric::Rct, Metric::Capacity];

    /// Column name in the projected table.
    pub fn column_name(self) -> &'static str {
        match self {
            Metric::Re => "Re",
            Metric::Rct => "Rct",
            Metric::Capacity => "Capacity",
        }
    }

    /// Chart caption.
    pub fn title(self) -> &'static str {
        match self {
            Metric::Re => "Electrolyte Resistance (Re) vs Cycle Index",
            Metric::Rct => "Charge Transfer Resistance (Rct) vs Cycle Index",
            Metric::Capacity => "Battery Capacity vs Cycle Index",
        }
    }
}

// ---------------------------------------------------------------------------
// Theme and style presets
// ---------------------------------------------------------------------------

/// Chart color theme. Only the dark preset exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
}

impl Theme {
    /// Plot and paper background.
    pub fn background(self) -> RGBColor {
        match self {
            Theme::Dark => RGBColor(0, 0, 0),
        }
    }

    /// Axis lines and label text.
    pub fn foreground(self) -> RGBColor {
        match self {
            Theme::Dark => WHITE,
        }
    }
}

/// How a single chart is drawn: line color, stroke width, theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub line_color: RGBColor,
    pub line_width: u32,
    pub theme: Theme,
}

impl ChartStyle {
    /// The preset used for each metric: white lines for Re and Capacity,
    /// green for Rct, all width 3 on the dark theme.
    pub fn preset(metric: Metric) -> ChartStyle {
        let line_color = match metric {
            Metric::Rct => GREEN,
            Metric::Re | Metric::Capacity => WHITE,
        };
        ChartStyle {
            line_color,
            line_width: 3,
            theme: Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_the_page_design() {
        assert_eq!(ChartStyle::preset(Metric::Re).line_color, WHITE);
        assert_eq!(ChartStyle::preset(Metric::Rct).line_color, GREEN);
        assert_eq!(ChartStyle::preset(Metric::Capacity).line_color, WHITE);
        for metric in Metric::ALL {
            let style = ChartStyle::preset(metric);
            assert_eq!(style.line_width, 3);
            assert_eq!(style.theme, Theme::Dark);
        }
    }
}
