//! Static chart generation for the AR try-on research report.
//!
//! All chart data is compiled in; running the batch writes a fixed set of
//! PNG figures into `docs/charts`.

pub mod batch;
pub mod charts;
pub mod data;
