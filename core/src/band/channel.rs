use crate::prelude::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

/// One WiFi channel: its number and center frequency in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiChannel {
    pub number: i32,
    pub frequency: i32,
}

impl WifiChannel {
    pub fn new(number: i32, frequency: i32) -> Self {
        Self { number, frequency }
    }
}

/// The two edge channels delimiting one rendered graph segment.
///
/// Invariant: `first.frequency < second.frequency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBoundaryPair {
    pub first: WifiChannel,
    pub second: WifiChannel,
}

impl ChannelBoundaryPair {
    pub fn new(first: WifiChannel, second: WifiChannel) -> GraphResult<Self> {
        if first.frequency >= second.frequency {
            return Err(GraphError::InvertedSpan {
                first: first.frequency,
                second: second.frequency,
            });
        }
        Ok(Self { first, second })
    }

    /// Span membership is inclusive of both edge frequencies.
    pub fn contains(&self, frequency: i32) -> bool {
        frequency >= self.first.frequency && frequency <= self.second.frequency
    }
}
