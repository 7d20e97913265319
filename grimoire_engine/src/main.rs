#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Grimoire **
//! Character-builder content importer for the host rules engine.

use anyhow::{Context, Result, bail};
use grimoire_data::{ActorFlags, FeatureDocument};
use grimoire_engine::{ProxyClient, generate_over_time_effect, load_config};

use log::info;

use std::env;
use std::fs;

const USAGE: &str = "usage: grimoire_engine munch <features.json> | grimoire_engine feats";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("munch") => {
            let Some(path) = args.get(1) else {
                bail!("munch needs a file of feature documents\n{USAGE}");
            };
            munch_features(path)
        },
        Some("feats") => fetch_feats().await,
        _ => bail!("{USAGE}"),
    }
}

/// Read feature documents from a JSON file, run the over-time pipeline on
/// each, and print the decorated documents to stdout.
fn munch_features(path: &str) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("while reading {path}"))?;
    let features: Vec<FeatureDocument> =
        serde_json::from_str(&raw).with_context(|| format!("while parsing {path}"))?;
    info!("munching {} feature documents", features.len());

    let mut actor = ActorFlags::default();
    let mut decorated = Vec::with_capacity(features.len());
    for feature in features {
        let (feature, updated) = generate_over_time_effect(feature, actor);
        actor = updated;
        decorated.push(feature);
    }

    let attached: usize = decorated.iter().map(|d| d.effects.len()).sum();
    info!("attached {attached} effects; actor over-time flag: {}", actor.over_time_effect);
    println!("{}", serde_json::to_string_pretty(&decorated)?);
    Ok(())
}

/// Fetch feats from the proxy service and print them as feature documents.
async fn fetch_feats() -> Result<()> {
    let config = load_config();
    let client = ProxyClient::new(config);
    let feats = client.fetch_feats().await.context("while fetching feats")?;
    info!("fetched {} feats", feats.len());
    println!("{}", serde_json::to_string_pretty(&feats)?);
    Ok(())
}
