//! Map panel configuration: view, marker, tiles, and popup.
//!
//! DESIGN
//! ======
//! Everything the embedded map needs is derived here from `MapInfo` so the
//! Leaflet bridge in `components::leaflet_map` stays a thin binding layer.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use crate::content::MapInfo;

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: u8 = 19;
pub const TILE_ATTRIBUTION: &str = "© <a href=\"https://www.openstreetmap.org/copyright\" target=\"_blank\" rel=\"noopener noreferrer\">OpenStreetMap</a> contributors";
pub const OSM_COPYRIGHT_URL: &str = "https://www.openstreetmap.org/copyright";

pub const MARKER_SIZE: (u32, u32) = (40, 40);
pub const MARKER_ANCHOR: (i32, i32) = (20, 40);
pub const POPUP_ANCHOR: (i32, i32) = (0, -40);
pub const MARKER_CLASS: &str = "map-marker";
pub const MARKER_HTML: &str = "<div class=\"map-marker__pin\"><span class=\"map-marker__glyph\">📍</span></div>";

/// Map center and zoom. The marker sits exactly on the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

impl From<&MapInfo> for MapView {
    fn from(info: &MapInfo) -> Self {
        Self { lat: info.lat, lng: info.lng, zoom: info.zoom }
    }
}

impl MapView {
    pub fn marker(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Driving-directions URL for a coordinate pair.
pub fn directions_url(lat: f64, lng: f64) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={lat},{lng}")
}

/// HTML bound to the marker popup.
pub fn popup_html(brand: &str, address: &str, view: MapView, directions_label: &str) -> String {
    format!(
        "<div class=\"map-popup\">\
         <h3 class=\"map-popup__title\">{}</h3>\
         <p class=\"map-popup__address\">{}</p>\
         <a class=\"map-popup__directions\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\
         </div>",
        escape_html(brand),
        escape_html(address),
        directions_url(view.lat, view.lng),
        escape_html(directions_label),
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Options object for `L.tileLayer`.
pub fn tile_layer_options() -> serde_json::Value {
    serde_json::json!({
        "attribution": TILE_ATTRIBUTION,
        "maxZoom": TILE_MAX_ZOOM,
    })
}

/// Options object for `L.divIcon`.
pub fn marker_icon_options() -> serde_json::Value {
    serde_json::json!({
        "className": MARKER_CLASS,
        "html": MARKER_HTML,
        "iconSize": [MARKER_SIZE.0, MARKER_SIZE.1],
        "iconAnchor": [MARKER_ANCHOR.0, MARKER_ANCHOR.1],
        "popupAnchor": [POPUP_ANCHOR.0, POPUP_ANCHOR.1],
    })
}
