use crate::model::signal::SignalDescriptor;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// One detected access point within a scan cycle.
///
/// Identity is the (ssid, bssid) pair; signal readings change between scans
/// and never participate in equality, hashing, or ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRecord {
    pub ssid: String,
    pub bssid: String,
    pub signal: SignalDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl SignalRecord {
    pub fn new(ssid: impl Into<String>, bssid: impl Into<String>, signal: SignalDescriptor) -> Self {
        Self {
            ssid: ssid.into(),
            bssid: bssid.into(),
            signal,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

impl PartialEq for SignalRecord {
    fn eq(&self, other: &Self) -> bool {
        self.ssid == other.ssid && self.bssid == other.bssid
    }
}

impl Eq for SignalRecord {}

impl Hash for SignalRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ssid.hash(state);
        self.bssid.hash(state);
    }
}

impl PartialOrd for SignalRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SignalRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ssid
            .cmp(&other.ssid)
            .then_with(|| self.bssid.cmp(&other.bssid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::signal::ChannelWidth;
    use std::collections::BTreeSet;

    fn record(ssid: &str, bssid: &str, level: i32) -> SignalRecord {
        SignalRecord::new(
            ssid,
            bssid,
            SignalDescriptor::new(2437, 2437, ChannelWidth::Mhz20, level),
        )
    }

    #[test]
    fn identity_ignores_signal_values() {
        let weak = record("CoffeeShop", "00:11:22:33:44:55", -80);
        let strong = record("CoffeeShop", "00:11:22:33:44:55", -30);
        assert_eq!(weak, strong);

        let mut set = BTreeSet::new();
        set.insert(weak);
        set.insert(strong);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn distinct_bssids_are_distinct_records() {
        let a = record("CoffeeShop", "00:11:22:33:44:55", -40);
        let b = record("CoffeeShop", "aa:bb:cc:dd:ee:ff", -40);
        assert_ne!(a, b);
    }

    #[test]
    fn ordering_follows_ssid_then_bssid() {
        let a = record("Alpha", "00:00:00:00:00:01", -40);
        let b = record("Alpha", "00:00:00:00:00:02", -40);
        let c = record("Beta", "00:00:00:00:00:00", -40);
        assert!(a < b);
        assert!(b < c);
    }
}
