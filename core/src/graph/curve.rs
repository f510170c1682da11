use crate::graph::frequency::{snap_to_grid, GRID_STEP};
use crate::model::{ChannelWidth, SignalRecord};
use serde::{Deserialize, Serialize};

/// Level drawn just outside the occupied band, in dBm.
pub const NOISE_FLOOR_DBM: i32 = -100;

/// Points per plotted series: baseline, rise, peak, fall, baseline.
pub const POINTS_PER_SERIES: usize = 5;

/// One (frequency, level) sample of a plotted signal-footprint curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub frequency: i32,
    pub level: i32,
}

impl CurvePoint {
    pub fn new(frequency: i32, level: i32) -> Self {
        Self { frequency, level }
    }
}

/// Approximates the record's spectral footprint as a flat-topped trapezoid
/// around its grid-aligned center frequency.
pub fn footprint(record: &SignalRecord) -> [CurvePoint; POINTS_PER_SERIES] {
    let center = snap_to_grid(record.signal.center_frequency);
    let level = record.signal.level;
    // The graph always draws the 20 MHz footprint, whatever the link width.
    let half = ChannelWidth::Mhz20.half_width();

    [
        CurvePoint::new(center - half, NOISE_FLOOR_DBM),
        CurvePoint::new(center - half + GRID_STEP, level),
        CurvePoint::new(center, level),
        CurvePoint::new(center + half - GRID_STEP, level),
        CurvePoint::new(center + half, NOISE_FLOOR_DBM),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChannelWidth, SignalDescriptor, SignalRecord};

    fn record(center: i32, level: i32) -> SignalRecord {
        SignalRecord::new(
            "AP",
            "00:11:22:33:44:55",
            SignalDescriptor::new(center, center, ChannelWidth::Mhz20, level),
        )
    }

    #[test]
    fn footprint_matches_known_channel() {
        let points = footprint(&record(2455, -40));
        assert_eq!(
            points,
            [
                CurvePoint::new(2445, -100),
                CurvePoint::new(2450, -40),
                CurvePoint::new(2455, -40),
                CurvePoint::new(2460, -40),
                CurvePoint::new(2465, -100),
            ]
        );
    }

    #[test]
    fn off_grid_center_is_aligned_first() {
        let points = footprint(&record(2457, -62));
        assert_eq!(points[2], CurvePoint::new(2455, -62));
        assert_eq!(points[0], CurvePoint::new(2445, NOISE_FLOOR_DBM));
        assert_eq!(points[4], CurvePoint::new(2465, NOISE_FLOOR_DBM));
    }

    #[test]
    fn footprint_rises_to_a_single_flat_peak() {
        let points = footprint(&record(5180, -70));
        for pair in points.windows(2) {
            assert!(pair[0].frequency < pair[1].frequency);
        }
        assert!(points[0].level <= points[1].level);
        assert_eq!(points[1].level, points[2].level);
        assert_eq!(points[2].level, points[3].level);
        assert!(points[3].level >= points[4].level);
    }
}
