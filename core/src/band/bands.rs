use crate::band::channel::{ChannelBoundaryPair, WifiChannel};
use crate::prelude::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel spacing shared by both bands, in MHz.
pub const CHANNEL_SPACING: i32 = 5;

/// Supported frequency bands with their fixed channel layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiBand {
    Ghz2,
    Ghz5,
}

impl WifiBand {
    /// Graph segments rendered for this band, ordered by frequency.
    pub fn channel_spans(&self) -> Vec<ChannelBoundaryPair> {
        let spans = match self {
            WifiBand::Ghz2 => vec![((1, 2412), (13, 2472))],
            WifiBand::Ghz5 => vec![
                ((36, 5180), (64, 5320)),
                ((100, 5500), (140, 5700)),
                ((149, 5745), (165, 5825)),
            ],
        };
        spans
            .into_iter()
            .map(|((n1, f1), (n2, f2))| ChannelBoundaryPair {
                first: WifiChannel::new(n1, f1),
                second: WifiChannel::new(n2, f2),
            })
            .collect()
    }

    /// Resolves a center frequency to its channel, if the band defines one.
    pub fn channel_for_frequency(&self, frequency: i32) -> Option<WifiChannel> {
        match self {
            WifiBand::Ghz2 => {
                // Channel 14 sits 12 MHz above channel 13 and breaks the grid.
                if frequency == 2484 {
                    return Some(WifiChannel::new(14, 2484));
                }
                if (2412..=2472).contains(&frequency) && (frequency - 2412) % CHANNEL_SPACING == 0 {
                    let number = 1 + (frequency - 2412) / CHANNEL_SPACING;
                    return Some(WifiChannel::new(number, frequency));
                }
                None
            }
            WifiBand::Ghz5 => {
                if (5180..=5825).contains(&frequency) && frequency % CHANNEL_SPACING == 0 {
                    let number = (frequency - 5000) / CHANNEL_SPACING;
                    return Some(WifiChannel::new(number, frequency));
                }
                None
            }
        }
    }

    pub fn in_band(&self, frequency: i32) -> bool {
        match self {
            WifiBand::Ghz2 => (2412..=2484).contains(&frequency),
            WifiBand::Ghz5 => (5180..=5825).contains(&frequency),
        }
    }
}

impl fmt::Display for WifiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifiBand::Ghz2 => write!(f, "2.4 GHz"),
            WifiBand::Ghz5 => write!(f, "5 GHz"),
        }
    }
}

impl FromStr for WifiBand {
    type Err = GraphError;

    fn from_str(value: &str) -> GraphResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "ghz2" | "2.4ghz" | "2.4" => Ok(WifiBand::Ghz2),
            "ghz5" | "5ghz" | "5" => Ok(WifiBand::Ghz5),
            other => Err(GraphError::UnknownBand(other.to_string())),
        }
    }
}
