//! Channel-graph data core for the AirScope WiFi survey platform.
//!
//! The modules turn per-cycle scan snapshots into plotted-curve data for a
//! channel-occupancy graph while keeping the rendering surface behind a
//! narrow trait.

pub mod band;
pub mod graph;
pub mod model;
pub mod prelude;
pub mod telemetry;

pub use prelude::{GraphError, GraphResult};
