use airscopecore::band::WifiBand;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanConfig {
    pub band: String,
    pub access_points: usize,
    pub cycles: usize,
    pub seed: u64,
}

impl ScanConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scan config {}", path_ref.display()))?;
        let config: ScanConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scan config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(band: String, access_points: usize, cycles: usize, seed: u64) -> Self {
        Self {
            band,
            access_points,
            cycles,
            seed,
        }
    }

    pub fn band(&self) -> anyhow::Result<WifiBand> {
        self.band
            .parse::<WifiBand>()
            .with_context(|| format!("resolving band name '{}'", self.band))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_resolves_band() {
        let cfg = ScanConfig::from_args("ghz5".into(), 8, 3, 7);
        assert_eq!(cfg.band().unwrap(), WifiBand::Ghz5);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"band: ghz2\naccess_points: 12\ncycles: 4\nseed: 99\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = ScanConfig::load(&path).unwrap();
        assert_eq!(cfg.access_points, 12);
        assert_eq!(cfg.band().unwrap(), WifiBand::Ghz2);
    }

    #[test]
    fn unknown_band_is_rejected() {
        let cfg = ScanConfig::from_args("6ghz".into(), 1, 1, 0);
        assert!(cfg.band().is_err());
    }
}
