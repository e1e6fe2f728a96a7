use crate::map::models::LatLng;

pub const INITIAL_LOCATION: LatLng = LatLng {
    lat: -23.5633697,
    lng: -46.6379345,
};
pub const DEFAULT_ZOOM: u8 = 15;
pub const FLY_TO_ZOOM: u8 = 16;

pub const PIN_ICON_URL: &str = "https://unpkg.com/leaflet@1.0.1/dist/images/marker-icon.png";
pub const PIN_ICON_SIZE: [f64; 2] = [25.0, 41.0];
pub const PACKAGE_ICON_URL: &str = "https://icon-library.com/images/box-icon/box-icon-9.jpg";
pub const PACKAGE_ICON_SIZE: [f64; 2] = [40.0, 51.0];
pub const ICON_ANCHOR: [f64; 2] = [12.5, 41.0];
pub const POPUP_ANCHOR: [f64; 2] = [0.0, -41.0];

pub const TILE_URL_PLACEHOLDERS: [&str; 3] = ["{z}", "{x}", "{y}"];
