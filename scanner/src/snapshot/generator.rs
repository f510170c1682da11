use airscopecore::band::bands::CHANNEL_SPACING;
use airscopecore::band::WifiBand;
use airscopecore::model::{ChannelWidth, ScanSnapshot, SignalDescriptor, SignalRecord};
use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for synthesizing one scan cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub band: String,
    pub access_points: usize,
    pub level_floor: i32,
    pub level_ceiling: i32,
    pub seed: u64,
    pub timestamp: f64,
    pub ssid_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            band: "ghz2".into(),
            access_points: 8,
            level_floor: -90,
            level_ceiling: -30,
            seed: 0,
            timestamp: 0.0,
            ssid_prefix: "AP".into(),
        }
    }
}

impl GeneratorConfig {
    fn normalized_access_points(&self) -> usize {
        self.access_points.max(1)
    }
}

/// Frequencies a synthetic access point may occupy, all on real channels of
/// the band's rendered spans.
fn span_frequencies(band: WifiBand) -> Vec<i32> {
    band.channel_spans()
        .iter()
        .flat_map(|span| {
            (span.first.frequency..=span.second.frequency)
                .step_by(CHANNEL_SPACING as usize)
                .collect::<Vec<i32>>()
        })
        .collect()
}

pub fn build_scan_snapshot_from_config(config: &GeneratorConfig) -> anyhow::Result<ScanSnapshot> {
    let band = config
        .band
        .parse::<WifiBand>()
        .with_context(|| format!("resolving generator band '{}'", config.band))?;
    if config.level_floor >= config.level_ceiling {
        anyhow::bail!(
            "level floor {} must be below ceiling {}",
            config.level_floor,
            config.level_ceiling
        );
    }

    let frequencies = span_frequencies(band);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let count = config.normalized_access_points();
    let mut records = Vec::with_capacity(count);

    for index in 0..count {
        let frequency = frequencies[rng.gen_range(0..frequencies.len())];
        let level = rng.gen_range(config.level_floor..=config.level_ceiling);
        // BSSIDs derive from the index alone so the same access points
        // reappear cycle after cycle with fresh readings.
        let bssid = format!(
            "02:00:00:00:{:02x}:{:02x}",
            (index >> 8) as u8,
            (index & 0xff) as u8
        );
        records.push(SignalRecord::new(
            format!("{}{}", config.ssid_prefix, index + 1),
            bssid,
            SignalDescriptor::new(frequency, frequency, ChannelWidth::Mhz20, level),
        ));
    }

    Ok(ScanSnapshot::new(config.timestamp, band, records))
}

pub fn build_scan_snapshot(band: &str, access_points: usize, seed: u64) -> anyhow::Result<ScanSnapshot> {
    let config = GeneratorConfig {
        band: band.to_string(),
        access_points,
        seed,
        ..Default::default()
    };
    build_scan_snapshot_from_config(&config)
}
