use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use cyclescope::{data, web};

/// Dataset location; written by the `generate_sample` bin if no real data
/// is available.
const DATASET_PATH: &str = "nasa_battery_data/metadata.csv";

/// Local listen address.
const LISTEN_ADDR: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load failures are configuration/data problems: fail before the
    // listener ever binds.
    let table = data::load_and_normalize(Path::new(DATASET_PATH))
        .with_context(|| format!("loading dataset from {DATASET_PATH}"))?;

    web::serve(LISTEN_ADDR, Arc::new(table)).await
}
