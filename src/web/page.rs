use std::fmt::Write;

use crate::chart::{render, ChartStyle, Metric, RenderError};
use crate::data::ProjectedTable;

// ---------------------------------------------------------------------------
// Page assembly
// ---------------------------------------------------------------------------

/// Build the full HTML document: three chart fragments (Re, Rct, Capacity)
/// stacked on a dark page. Charts are re-rendered on every call; nothing is
/// cached.
pub fn render_page(table: &ProjectedTable) -> Result<String, RenderError> {
    let mut html = String::with_capacity(64 * 1024);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    )?;
    writeln!(html, "<title>Battery Cycle Telemetry</title>")?;
    writeln!(html, "<style>")?;
    writeln!(
        html,
        "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#eee;background:#000;}}"
    )?;
    writeln!(html, "h1{{margin:0 0 16px 0;font-size:24px;}}")?;
    writeln!(html, ".chart{{margin:0 0 24px 0;}}")?;
    writeln!(html, "svg{{max-width:100%;height:auto;}}")?;
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<h1>Battery Cycle Telemetry</h1>")?;

    for metric in Metric::ALL {
        let fragment = render(table, metric, ChartStyle::preset(metric))?;
        writeln!(html, "<div class=\"chart\">")?;
        writeln!(html, "{fragment}")?;
        writeln!(html, "</div>")?;
    }

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
}
