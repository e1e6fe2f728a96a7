use crate::cli::errors::ConfigError;
use crate::cli::Args;
use consts::TILE_URL_PLACEHOLDERS;
use models::TileLayer;

pub mod consts;
pub mod models;
pub mod view;

#[derive(Clone, Debug)]
pub struct MapSettings {
    pub tile_layer: TileLayer,
}

pub fn init(args: &Args) -> Result<MapSettings, ConfigError> {
    let missing_placeholder = TILE_URL_PLACEHOLDERS
        .iter()
        .any(|placeholder| !args.tile_url.contains(placeholder));
    if missing_placeholder {
        return Err(ConfigError::InvalidTileUrl(args.tile_url.clone()));
    }
    tracing::info!(tile_url = %args.tile_url, "Initialized map settings.");
    Ok(MapSettings {
        tile_layer: TileLayer {
            url_template: args.tile_url.clone(),
            attribution: args.tile_attribution.clone(),
        },
    })
}
