use airscopecore::model::ScanSnapshot;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Reads one scan cycle from a JSON capture file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> anyhow::Result<ScanSnapshot> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading scan snapshot {}", path_ref.display()))?;
    let snapshot: ScanSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("parsing scan snapshot {}", path_ref.display()))?;
    Ok(snapshot)
}
