pub mod record;
pub mod signal;
pub mod snapshot;

pub use record::SignalRecord;
pub use signal::{ChannelWidth, SignalDescriptor};
pub use snapshot::ScanSnapshot;
