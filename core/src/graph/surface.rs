use crate::graph::curve::CurvePoint;
use crate::model::SignalRecord;

/// Rendering seam owned by the charting subsystem.
///
/// Series are keyed by record identity; the surface decides how a curve is
/// actually drawn.
pub trait PlottingSurface {
    /// True when no series exists yet for this record's identity.
    fn is_new_series(&self, record: &SignalRecord) -> bool;

    fn add_series(&mut self, record: &SignalRecord, points: &[CurvePoint], highlight: bool);

    fn update_series(&mut self, record: &SignalRecord, points: &[CurvePoint], highlight: bool);
}
