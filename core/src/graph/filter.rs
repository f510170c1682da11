use crate::band::ChannelBoundaryPair;
use crate::model::SignalRecord;
use std::collections::BTreeSet;

/// Selects the records whose center frequency falls within the span.
///
/// The result collapses duplicate identities; ordering follows record
/// identity so repeated runs over the same scan are deterministic.
pub fn select(records: &[SignalRecord], span: &ChannelBoundaryPair) -> BTreeSet<SignalRecord> {
    records
        .iter()
        .filter(|record| span.contains(record.signal.center_frequency))
        .cloned()
        .collect()
}
