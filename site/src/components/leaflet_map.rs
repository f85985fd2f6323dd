//! Interactive map backed by the globally loaded Leaflet script.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaflet is loaded from the document head, not bundled. The component
//! binds to the global `L` object through `wasm-bindgen` and creates the
//! map once its container mounts. On the server it renders only the
//! container.
//!
//! TRADE-OFFS
//! ==========
//! If the script failed to load, `L.map` throws; the error is logged and
//! the container stays empty rather than taking down hydration.

use leptos::prelude::*;

use crate::util::map::MapView;

#[cfg(feature = "hydrate")]
mod leaflet {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Map;
        pub type Layer;

        #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
        pub fn map(element: &web_sys::HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

        #[wasm_bindgen(method, js_name = setView)]
        pub fn set_view(this: &Map, center: &JsValue, zoom: u8) -> Map;

        #[wasm_bindgen(method)]
        pub fn remove(this: &Map);

        #[wasm_bindgen(method, js_name = invalidateSize)]
        pub fn invalidate_size(this: &Map);

        #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
        pub fn tile_layer(url: &str, options: &JsValue) -> Layer;

        #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
        pub fn div_icon(options: &JsValue) -> JsValue;

        #[wasm_bindgen(js_namespace = L, js_name = marker)]
        pub fn marker(center: &JsValue, options: &JsValue) -> Layer;

        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &Layer, map: &Map) -> Layer;

        #[wasm_bindgen(method, js_name = bindPopup)]
        pub fn bind_popup(this: &Layer, html: &str) -> Layer;
    }
}

#[cfg(feature = "hydrate")]
fn to_js(value: &serde_json::Value) -> wasm_bindgen::JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap_or(wasm_bindgen::JsValue::UNDEFINED)
}

#[cfg(feature = "hydrate")]
fn mount(element: &web_sys::HtmlElement, view: MapView, popup: &str) -> Result<leaflet::Map, wasm_bindgen::JsValue> {
    use crate::util::map::{TILE_URL, marker_icon_options, tile_layer_options};

    let center = to_js(&serde_json::json!([view.lat, view.lng]));
    let map = leaflet::map(element, &to_js(&serde_json::json!({ "scrollWheelZoom": false })))?;
    map.set_view(&center, view.zoom);
    leaflet::tile_layer(TILE_URL, &to_js(&tile_layer_options())).add_to(&map);

    let icon = leaflet::div_icon(&to_js(&marker_icon_options()));
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"icon".into(), &icon)?;
    leaflet::marker(&center, &options).add_to(&map).bind_popup(popup);
    Ok(map)
}

/// Map centered on `view` with a single marker whose popup shows `popup_html`.
#[component]
pub fn LeafletMap(view: MapView, popup_html: String, #[prop(into)] expanded: Signal<bool>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new_local(None::<leaflet::Map>);
        Effect::new(move || {
            let Some(element) = container.get() else {
                return;
            };
            if handle.with_value(Option::is_some) {
                return;
            }
            match mount(&element, view, &popup_html) {
                Ok(map) => handle.set_value(Some(map)),
                Err(err) => log::error!("map init failed: {err:?}"),
            }
        });
        // Leaflet caches its container size; re-measure when the panel resizes.
        Effect::new(move || {
            let _ = expanded.get();
            handle.with_value(|map| {
                if let Some(map) = map {
                    map.invalidate_size();
                }
            });
        });
        on_cleanup(move || {
            handle.update_value(|map| {
                if let Some(map) = map.take() {
                    map.remove();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (view, popup_html, expanded);

    view! { <div class="leaflet-map" node_ref=container role="application" aria-label="Carte"></div> }
}
