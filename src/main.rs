//! ==============================================================================
//! main.rs - iot data generator entry point
//! ==============================================================================
//!
//! purpose:
//!     generates a week of synthetic sensor readings for every location and
//!     sensor type and writes them to `iot_sensor_data.json`.
//!
//! responsibilities:
//!     - load configuration (config/generator.toml or built-in defaults)
//!     - initialize tracing (stderr)
//!     - seed the rng, run the generator, write the document
//!     - report progress on stdout
//!
//! relationships:
//!     - uses: config.rs, generator.rs, writer.rs, logging.rs
//!
//! ==============================================================================

use anyhow::Result;
use iot_datagen::config::{ConfigOrigin, GeneratorConfig};
use iot_datagen::{generator, logging, writer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<()> {
    // step 1: load configuration
    let (config, origin) = GeneratorConfig::load_or_default();

    // step 2: logging, now that the level is known
    logging::init(&config.logging);
    match &origin {
        ConfigOrigin::File(path) => tracing::info!("[CONFIG] Loaded from {}", path.display()),
        ConfigOrigin::Fallback { path, reason } => {
            tracing::warn!("[CONFIG] Failed to load {}: {} - using defaults", path.display(), reason)
        }
        ConfigOrigin::Defaults => tracing::info!("[CONFIG] No config file found - using defaults"),
    }
    config.log_summary();

    // step 3: generate
    println!("Generating IoT sensor data...");
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    let dataset = generator::generate_now(&config, &mut rng);

    let counts = dataset.status_counts();
    tracing::info!(
        normal = counts.normal,
        warning = counts.warning,
        alert = counts.alert,
        "status summary"
    );

    // step 4: persist
    let path = writer::DEFAULT_OUTPUT_FILE;
    let written = match writer::write_dataset(&dataset, path) {
        Ok(n) => n,
        Err(e) => {
            tracing::error!("[ERROR] {:#}", e);
            return Err(e);
        }
    };

    println!("Generated {} sensor readings in {}", written, path);
    println!("Data generation complete!");
    Ok(())
}
