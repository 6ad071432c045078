use std::sync::Arc;
use std::time::Duration;

use catalog::{HttpSource, ServiceConfig};
use clap::Parser;
use foundation::{RouteId, SpotId, parse_selection};
use layers::MapConfig;
use runtime::{Action, Session, render, spawn_loads};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod console;

use console::ConsoleSurface;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse points of interest and routes from the spots service")]
struct Args {
    /// Data service base URL (default: SPOTMAP_API_BASE or http://127.0.0.1:8000)
    #[arg(long)]
    api_base: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Category filter: an id, or "all"
    #[arg(long)]
    category: Option<String>,

    /// Route to overlay: an id, or "none"
    #[arg(long)]
    route: Option<String>,

    /// Spot to open in the detail panel
    #[arg(long)]
    spot: Option<SpotId>,

    /// Print the composed view as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = ServiceConfig::from_env();
    if let Some(base) = args.api_base {
        config.base_url = base;
    }
    if let Some(ms) = args.timeout_ms {
        config = config.with_timeout(Duration::from_millis(ms));
    }
    info!(base = %config.base_url, prefix = %config.api_prefix, "loading collections");

    let source = Arc::new(HttpSource::new(config)?);
    let mut session = Session::new(MapConfig::default());
    let mut loads = spawn_loads(source);
    session
        .apply_loads(&mut loads, |s| {
            info!(markers = s.view().map.markers.len(), "view updated");
        })
        .await;

    if let Some(text) = args.category.as_deref() {
        session.select_category_text(text)?;
    }
    if let Some(text) = args.route.as_deref() {
        let route: Option<RouteId> = parse_selection(text)?;
        session.dispatch(Action::SelectRoute(route));
    }
    if let Some(spot) = args.spot {
        session.dispatch(Action::SelectSpot(spot));
    }

    let view = session.view();
    if let Some(spot) = args.spot {
        if view.panel.detail.is_none() {
            warn!(%spot, "spot not found");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let mut surface = ConsoleSurface::new();
        render(&view, &mut surface);
        print!("{}", surface.into_string());
    }
    Ok(())
}
