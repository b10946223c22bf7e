//! Armory demo binary.
//!
//! Builds a headless runtime from the environment (or the embedded demo
//! content), plays a scripted session on the firing range while logging every
//! published event, and prints the final loadout as JSON.
//!
//! ```bash
//! RUST_LOG=armory_core=debug cargo run -p armory-client
//! ARMORY_LEVEL=./my_level.ron cargo run -p armory-client
//! ```

mod observer;
mod script;

use anyhow::Result;
use armory_runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    let mut runtime = Runtime::builder().config(config).build()?;

    let bus = runtime.bus();
    let observers = observer::spawn(&bus);
    drop(bus);

    script::run(&mut runtime, script::RANGE_TOUR)?;

    let loadout = runtime.loadout();
    let frames = runtime.frame();
    drop(runtime);

    let mut events = 0;
    for observer in observers {
        events += observer.await?;
    }
    tracing::info!(frames, events, "session finished");

    println!("{}", serde_json::to_string_pretty(&loadout)?);
    Ok(())
}
