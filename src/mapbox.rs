use js_sys::{Function, Reflect};
use map_core::{LayerSpec, MapEngine, MapError, Projection, SourceSpec};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `mapboxgl.Map`, loaded by the host page.
    #[wasm_bindgen(js_namespace = mapboxgl)]
    #[derive(Clone, Debug)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, catch)]
    pub fn new(options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = addSource, catch)]
    fn add_source(this: &Map, id: &str, source: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = addLayer, catch)]
    fn add_layer(this: &Map, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getLayoutProperty, catch)]
    fn get_layout_property(this: &Map, layer: &str, name: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = setLayoutProperty, catch)]
    fn set_layout_property(this: &Map, layer: &str, name: &str, value: &str)
        -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getProjection)]
    fn get_projection(this: &Map) -> JsValue;

    #[wasm_bindgen(method, js_name = setProjection, catch)]
    fn set_projection(this: &Map, projection: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &Function);
}

/// Best-effort text for a thrown JS value.
pub fn js_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Serialize through a JSON string so serde_json maps arrive as plain objects.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, MapError> {
    let json =
        serde_json::to_string(value).map_err(|e| MapError::engine("serialize", e.to_string()))?;
    js_sys::JSON::parse(&json).map_err(|e| MapError::engine("JSON.parse", js_message(&e)))
}

/// Set `mapboxgl.accessToken` before the first map is constructed.
pub fn set_access_token(token: &str) -> Result<(), MapError> {
    let mapboxgl = Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))
        .map_err(|e| MapError::engine("accessToken", js_message(&e)))?;
    if mapboxgl.is_undefined() {
        return Err(MapError::engine("accessToken", "mapboxgl is not loaded"));
    }
    Reflect::set(
        &mapboxgl,
        &JsValue::from_str("accessToken"),
        &JsValue::from_str(token),
    )
    .map_err(|e| MapError::engine("accessToken", js_message(&e)))?;
    Ok(())
}

pub struct MapboxEngine {
    map: Map,
}

impl MapboxEngine {
    pub fn new(map: Map) -> Self {
        Self { map }
    }
}

impl MapEngine for MapboxEngine {
    fn add_source(&mut self, id: &str, source: &SourceSpec<'_>) -> Result<(), MapError> {
        let source = to_js(source)?;
        self.map
            .add_source(id, &source)
            .map_err(|e| MapError::engine("addSource", js_message(&e)))
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), MapError> {
        let layer = to_js(layer)?;
        self.map
            .add_layer(&layer)
            .map_err(|e| MapError::engine("addLayer", js_message(&e)))
    }

    fn layout_property(&self, layer_id: &str, name: &str) -> Result<Option<String>, MapError> {
        let value = self
            .map
            .get_layout_property(layer_id, name)
            .map_err(|e| MapError::engine("getLayoutProperty", js_message(&e)))?;
        Ok(value.as_string())
    }

    fn set_layout_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &str,
    ) -> Result<(), MapError> {
        self.map
            .set_layout_property(layer_id, name, value)
            .map_err(|e| MapError::engine("setLayoutProperty", js_message(&e)))
    }

    fn projection_name(&self) -> String {
        let projection = self.map.get_projection();
        Reflect::get(&projection, &JsValue::from_str("name"))
            .ok()
            .and_then(|n| n.as_string())
            .unwrap_or_default()
    }

    fn set_projection(&mut self, projection: Projection) -> Result<(), MapError> {
        self.map
            .set_projection(projection.name())
            .map_err(|e| MapError::engine("setProjection", js_message(&e)))
    }
}
