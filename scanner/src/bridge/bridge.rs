use crate::bridge::model::GraphModel;
use crate::pipeline::runner::Runner;
use crate::snapshot::generator::{build_scan_snapshot_from_config, GeneratorConfig};
use crate::surface::SeriesStore;
use airscopecore::model::ScanSnapshot;
use anyhow::Result;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn graph_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9010))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Bridge that serves the latest graph model and ingests scan cycles.
pub struct GraphBridge {
    state: Arc<RwLock<GraphModel>>,
}

impl GraphBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(GraphModel::default()));
        let store = Arc::new(RwLock::new(SeriesStore::new()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let store_filter = warp::any().map(move || store.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("graph")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<GraphModel>>| warp::reply::json(&*state.read().unwrap()));

        let ingest_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(store_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |snapshot: ScanSnapshot,
                 state: Arc<RwLock<GraphModel>>,
                 store: Arc<RwLock<SeriesStore>>,
                 runner: Arc<Runner>| async move {
                    let mut store_guard = store.write().unwrap();
                    match runner.execute(&snapshot, &mut store_guard) {
                        Ok(result) => {
                            let mut guard = state.write().unwrap();
                            *guard = result.model;
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(
                                    &json!({"status": "ok", "series": result.series_count}),
                                ),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let profile_route = warp::path("ingest-profile")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(store_filter)
            .and(runner_filter)
            .and_then(
                |config: GeneratorConfig,
                 state: Arc<RwLock<GraphModel>>,
                 store: Arc<RwLock<SeriesStore>>,
                 runner: Arc<Runner>| async move {
                    let mut store_guard = store.write().unwrap();
                    match build_scan_snapshot_from_config(&config)
                        .and_then(|snapshot| runner.execute(&snapshot, &mut store_guard))
                    {
                        Ok(result) => {
                            let mut guard = state.write().unwrap();
                            *guard = result.model;
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "series": result.series_count,
                                    "band": config.band.clone()
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest-profile error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(ingest_route).or(profile_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(graph_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &GraphModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[GRAPH] band {}, series: {}",
            guard.band, guard.series_count
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GRAPH] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> GraphModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::config::ScanConfig;
    use crate::snapshot::generator::build_scan_snapshot;
    use std::sync::Arc;

    #[test]
    fn graph_bridge_updates_state() {
        let config = ScanConfig::from_args("ghz2".into(), 5, 1, 3);
        let runner = Arc::new(Runner::new(config));
        let bridge = GraphBridge::new(runner.clone());

        let snapshot = build_scan_snapshot("ghz2", 5, 3).unwrap();
        let mut store = SeriesStore::new();
        let result = runner.execute(&snapshot, &mut store).unwrap();

        bridge.publish(&result.model).unwrap();
        assert_eq!(bridge.snapshot().series_count, result.model.series_count);
        assert_eq!(bridge.snapshot().band, "2.4 GHz");
    }
}
