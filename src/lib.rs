//! cyclescope – battery cycle telemetry viewer served as a single web page.
//!
//! Reads a static CSV of battery-cycle telemetry, derives a monotonic
//! `Cycle_Index`, projects down to the three plotted metrics, and serves one
//! HTML page with three line charts (Re, Rct, Capacity vs cycle index).
//!
//! The pipeline is linear: load → normalize → project → render × 3 → embed.
//! The table is loaded once at startup and shared read-only with request
//! handlers; every request re-renders the charts from it.

pub mod chart;
pub mod data;
pub mod web;
