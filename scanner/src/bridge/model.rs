use airscopecore::graph::CurvePoint;
use serde::{Deserialize, Serialize};

/// One plotted curve as served to the rendering client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesModel {
    pub ssid: String,
    pub bssid: String,
    pub points: Vec<CurvePoint>,
    pub highlight: bool,
}

/// Latest graph state published by the bridge.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphModel {
    pub band: String,
    pub series: Vec<SeriesModel>,
    pub series_count: usize,
    pub span_notes: Vec<String>,
}
