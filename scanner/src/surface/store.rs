use crate::bridge::model::SeriesModel;
use airscopecore::graph::{CurvePoint, PlottingSurface};
use airscopecore::model::SignalRecord;
use std::collections::BTreeMap;

/// In-memory plotting surface backing the HTTP graph model.
///
/// Series are keyed by record identity and kept in identity order so the
/// served model is stable across cycles.
pub struct SeriesStore {
    series: BTreeMap<(String, String), StoredSeries>,
}

struct StoredSeries {
    points: Vec<CurvePoint>,
    highlight: bool,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series_models(&self) -> Vec<SeriesModel> {
        self.series
            .iter()
            .map(|((ssid, bssid), stored)| SeriesModel {
                ssid: ssid.clone(),
                bssid: bssid.clone(),
                points: stored.points.clone(),
                highlight: stored.highlight,
            })
            .collect()
    }

    fn key(record: &SignalRecord) -> (String, String) {
        (record.ssid.clone(), record.bssid.clone())
    }
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlottingSurface for SeriesStore {
    fn is_new_series(&self, record: &SignalRecord) -> bool {
        !self.series.contains_key(&Self::key(record))
    }

    fn add_series(&mut self, record: &SignalRecord, points: &[CurvePoint], highlight: bool) {
        self.series.insert(
            Self::key(record),
            StoredSeries {
                points: points.to_vec(),
                highlight,
            },
        );
    }

    fn update_series(&mut self, record: &SignalRecord, points: &[CurvePoint], highlight: bool) {
        if let Some(stored) = self.series.get_mut(&Self::key(record)) {
            stored.points = points.to_vec();
            stored.highlight = highlight;
        }
    }
}
