#![cfg(target_arch = "wasm32")]
use map_core::{MapConfig, MapConfigurator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod mapbox;
mod ui;

pub use mapbox::Map;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("speedy-map starting");
    Ok(())
}

/// Build the map described by `config` and return the engine's map object.
///
/// Sources, layers and legend are attached on the map's `load` event; the
/// layer menu is synced on every `idle` event.
#[wasm_bindgen(js_name = speedyMap)]
pub fn speedy_map(config: JsValue) -> Result<Map, JsValue> {
    init(&config).map_err(|e| {
        log::error!("init error: {:#}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

fn parse_config(config: &JsValue) -> anyhow::Result<MapConfig> {
    if config.is_undefined() || config.is_null() {
        return Ok(MapConfig::default());
    }
    let json = js_sys::JSON::stringify(config)
        .map_err(|e| anyhow::anyhow!("config is not serializable: {}", mapbox::js_message(&e)))?;
    Ok(MapConfig::from_json_str(&String::from(json))?)
}

fn init(config: &JsValue) -> anyhow::Result<Map> {
    let config = parse_config(config)?;
    let document: web::Document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The engine mounts into the container; legend and menu are ours
    dom::element_by_id(&document, &config.view.container)?;
    let controls = dom::DomControls::new(&document)?;

    if let Some(token) = &config.access_token {
        mapbox::set_access_token(token)?;
    }
    let options = mapbox::to_js(&config.view)?;
    let map = Map::new(&options)
        .map_err(|e| anyhow::anyhow!("mapboxgl.Map: {}", mapbox::js_message(&e)))?;
    log::info!(
        "[map] created container={} sources={:?}",
        config.view.container,
        config.sources.kinds().collect::<Vec<_>>()
    );

    let engine = mapbox::MapboxEngine::new(map.clone());
    let configurator = Rc::new(RefCell::new(MapConfigurator::new(config, engine, controls)));
    events::wire_load(&map, configurator.clone());
    events::wire_idle(&map, configurator);
    Ok(map)
}
