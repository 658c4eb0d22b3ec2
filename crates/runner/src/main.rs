//! Presentr Runner - composition root binary
//!
//! Lays out every built-in preset in the configured container and prints one JSON
//! line per preset.

mod config;

use anyhow::Result;
use presentr_domain::{DomainError, ModalCenterPosition, ModalSize, PresentationType};
use presentr_layout::{resolve_presentation, LayoutError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::RunnerConfig;

fn presets() -> Result<Vec<PresentationType>, DomainError> {
    Ok(vec![
        PresentationType::Alert,
        PresentationType::Popup,
        PresentationType::TopHalf,
        PresentationType::BottomHalf,
        PresentationType::FullScreen,
        PresentationType::Dynamic {
            center: ModalCenterPosition::Center,
        },
        PresentationType::DynamicHeight {
            center: ModalCenterPosition::Bottom,
            side_margin: None,
        },
        PresentationType::Custom {
            width: ModalSize::fluid(0.9)?,
            height: ModalSize::Half,
            center: ModalCenterPosition::Bottom,
        },
    ])
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "presentr=info,presentr_layout=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunnerConfig::from_env()?;
    let settings = config.load_settings()?;
    tracing::info!(
        "Resolving presets in a {}x{} container",
        config.container.width(),
        config.container.height()
    );

    for presentation in presets()? {
        match resolve_presentation(presentation, &settings, config.container, config.content_size) {
            Ok(resolved) => println!("{}", serde_json::to_string(&resolved)?),
            Err(LayoutError::MissingContentSize { presentation_type }) => {
                tracing::warn!(
                    "Skipping {}: set PRESENTR_CONTENT_WIDTH and PRESENTR_CONTENT_HEIGHT",
                    presentation_type
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
