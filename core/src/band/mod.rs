pub mod bands;
pub mod channel;

pub use bands::WifiBand;
pub use channel::{ChannelBoundaryPair, WifiChannel};
