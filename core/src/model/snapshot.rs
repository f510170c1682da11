use crate::band::WifiBand;
use crate::model::record::SignalRecord;
use serde::{Deserialize, Serialize};

/// One complete scan cycle as delivered by the platform scan source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSnapshot {
    pub timestamp: f64,
    pub band: WifiBand,
    pub records: Vec<SignalRecord>,
}

impl ScanSnapshot {
    pub fn new(timestamp: f64, band: WifiBand, records: Vec<SignalRecord>) -> Self {
        Self {
            timestamp,
            band,
            records,
        }
    }
}
