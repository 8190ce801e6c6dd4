//! Mail Picker - email client chooser window
//!
//! Shows one button per email client and marks the one the user picked.
//! The pick is printed to stdout and is not persisted.

use mail_picker::{config, gui};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Mail Picker starting...");

    let config = config::load_config();

    gui::run(config)?;

    Ok(())
}
