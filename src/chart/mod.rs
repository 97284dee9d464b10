//! Chart layer: style presets and SVG rendering.
//!
//! Each chart is a pure function of the projected table and a style preset,
//! serialized to a bare `<svg>` element that the web layer embeds in the
//! page. Nothing here touches the filesystem or mutates the table.

pub mod render;
pub mod style;

pub use render::{render, RenderError};
pub use style::{ChartStyle, Metric, Theme};
