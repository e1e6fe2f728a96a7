use crate::deliveries::form::DeliveryForm;
use crate::deliveries::models::Delivery;
use crate::map::consts::{
    DEFAULT_ZOOM, FLY_TO_ZOOM, ICON_ANCHOR, PACKAGE_ICON_SIZE, PACKAGE_ICON_URL, PIN_ICON_SIZE,
    PIN_ICON_URL, POPUP_ANCHOR,
};
use crate::map::models::{FlyTo, LatLng, Marker, MarkerIcon, MarkerKind, Popup, TileLayer};
use crate::map::MapSettings;
use serde::{Deserialize, Serialize};

/// Everything the page needs to draw the map for one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub tile_layer: TileLayer,
    pub center: LatLng,
    pub zoom: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_marker: Option<Marker>,
    pub delivery_markers: Vec<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fly_to: Option<FlyTo>,
}

impl MapView {
    pub fn build(form: &DeliveryForm, settings: &MapSettings) -> Self {
        let position = form.pending().position;
        Self {
            tile_layer: settings.tile_layer.clone(),
            center: form.map_location(),
            zoom: DEFAULT_ZOOM,
            pending_marker: position.map(pending_marker),
            delivery_markers: form.deliveries().iter().map(delivery_marker).collect(),
            fly_to: position.map(|position| FlyTo {
                position,
                zoom: FLY_TO_ZOOM,
            }),
        }
    }
}

fn pending_marker(position: LatLng) -> Marker {
    Marker {
        id: None,
        kind: MarkerKind::Pending,
        position,
        icon: icon(PIN_ICON_URL, PIN_ICON_SIZE),
        popup: None,
    }
}

fn delivery_marker(delivery: &Delivery) -> Marker {
    Marker {
        id: Some(delivery.id),
        kind: MarkerKind::Delivery,
        position: delivery.position(),
        icon: icon(PACKAGE_ICON_URL, PACKAGE_ICON_SIZE),
        popup: Some(Popup {
            title: delivery.name.clone(),
            body: popup_body(delivery),
        }),
    }
}

fn popup_body(delivery: &Delivery) -> String {
    if delivery.complement.is_empty() {
        delivery.address.label.clone()
    } else {
        format!("{} - {}", delivery.address.label, delivery.complement)
    }
}

fn icon(url: &str, size: [f64; 2]) -> MarkerIcon {
    MarkerIcon {
        icon_url: url.to_string(),
        icon_size: size,
        icon_anchor: ICON_ANCHOR,
        popup_anchor: POPUP_ANCHOR,
    }
}
