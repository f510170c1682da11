use crate::bridge::model::GraphModel;
use crate::pipeline::config::ScanConfig;
use crate::surface::SeriesStore;
use airscopecore::graph::GraphDataBuilder;
use airscopecore::model::ScanSnapshot;

pub struct ScanResult {
    pub series_count: usize,
    pub span_notes: Vec<String>,
    pub model: GraphModel,
}

#[derive(Clone)]
pub struct Runner {
    config: ScanConfig,
}

impl Runner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Runs one scan cycle against the shared series store and returns the
    /// refreshed graph model.
    pub fn execute(
        &self,
        snapshot: &ScanSnapshot,
        store: &mut SeriesStore,
    ) -> anyhow::Result<ScanResult> {
        let expected = self.config.band()?;
        if snapshot.band != expected {
            anyhow::bail!(
                "snapshot band {} does not match configured band {}",
                snapshot.band,
                expected
            );
        }

        let builder = GraphDataBuilder::new();
        let reports = builder.process_snapshot(store, snapshot);

        let span_notes: Vec<String> = reports
            .iter()
            .map(|report| {
                format!(
                    "span {}-{} MHz: {} series",
                    report.span.first.frequency, report.span.second.frequency, report.series
                )
            })
            .collect();
        let series_count: usize = reports.iter().map(|report| report.series).sum();
        log::info!(
            "cycle t={:.1}: painted {} series across {} spans",
            snapshot.timestamp,
            series_count,
            reports.len()
        );

        let model = GraphModel {
            band: snapshot.band.to_string(),
            series: store.series_models(),
            series_count: store.len(),
            span_notes: span_notes.clone(),
        };

        Ok(ScanResult {
            series_count,
            span_notes,
            model,
        })
    }
}
