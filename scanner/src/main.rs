use anyhow::Context;
use bridge::bridge::GraphBridge;
use clap::Parser;
use pipeline::config::ScanConfig;
use pipeline::runner::Runner;
use snapshot::generator::build_scan_snapshot;
use snapshot::loader::load_snapshot;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use surface::SeriesStore;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod bridge;
mod pipeline;
mod snapshot;
mod surface;

#[derive(Parser)]
#[command(author, version, about = "AirScope scan-cycle driver")]
struct Args {
    /// Run the configured scan cycles once and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a scan config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Replay a captured scan snapshot (JSON) instead of synthesizing one
    #[arg(long)]
    snapshot: Option<PathBuf>,
    #[arg(long, default_value = "ghz2")]
    band: String,
    #[arg(long, default_value_t = 8)]
    access_points: usize,
    #[arg(long, default_value_t = 3)]
    cycles: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Keep the graph bridge alive for incoming scan cycles
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scan_config = if let Some(path) = args.config {
        ScanConfig::load(path)?
    } else {
        ScanConfig::from_args(args.band, args.access_points, args.cycles, args.seed)
    };

    let runner = Runner::new(scan_config.clone());
    let graph_bridge = GraphBridge::new(Arc::new(runner.clone()));

    if args.offline {
        let mut store = SeriesStore::new();
        let mut last_result = None;

        for cycle in 0..scan_config.cycles.max(1) {
            let cycle_snapshot = if let Some(path) = args.snapshot.as_ref() {
                load_snapshot(path)?
            } else {
                // A fresh seed per cycle varies the levels while the access
                // point identities repeat, exercising the update path.
                build_scan_snapshot(
                    &scan_config.band,
                    scan_config.access_points,
                    scan_config.seed + cycle as u64,
                )?
            };
            let result = runner.execute(&cycle_snapshot, &mut store)?;
            println!(
                "Cycle {} -> painted {}, stored series {}",
                cycle + 1,
                result.series_count,
                store.len()
            );
            last_result = Some(result);
        }

        if let Some(result) = last_result {
            graph_bridge.publish(&result.model)?;
            graph_bridge.publish_status("Offline scan results ready.");

            let report = format!(
                "band={} series={} notes={:?}\n",
                result.model.band, result.model.series_count, result.span_notes
            );
            let report_path = PathBuf::from("tools/data/offline_scan.log");
            if let Some(parent) = report_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(report_path)?;
            file.write_all(report.as_bytes())?;
        }
    }
    if args.serve {
        graph_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
