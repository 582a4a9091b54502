//! Charts module - Static chart rendering with plotters

pub mod metrics;
pub mod palette;
pub mod renderer;

pub use metrics::KpiPanel;
