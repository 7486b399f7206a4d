// Recording fakes for the engine and the DOM controls.

#![allow(dead_code)]

use map_core::{
    Controls, LayerKind, LayerSpec, LegendSection, MapConfig, MapConfigurator, MapEngine,
    MapError, Projection, SourceData, SourceSpec, Sources,
};
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Default)]
pub struct RecordingEngine {
    pub sources: Vec<(String, Value)>,
    pub layers: Vec<LayerSpec>,
    pub layout: HashMap<(String, String), String>,
    pub projection: String,
    pub fail_add_layer: bool,
    pub reject_layer: Option<&'static str>,
}

impl RecordingEngine {
    pub fn with_projection(name: &str) -> Self {
        Self {
            projection: name.to_string(),
            ..Self::default()
        }
    }

    pub fn source_ids(&self) -> Vec<&str> {
        self.sources.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.id).collect()
    }

    pub fn visibility(&self, layer: &str) -> Option<&str> {
        self.layout
            .get(&(layer.to_string(), "visibility".to_string()))
            .map(String::as_str)
    }
}

impl MapEngine for RecordingEngine {
    fn add_source(&mut self, id: &str, source: &SourceSpec<'_>) -> Result<(), MapError> {
        let spec =
            serde_json::to_value(source).map_err(|e| MapError::engine("addSource", e.to_string()))?;
        self.sources.push((id.to_string(), spec));
        Ok(())
    }

    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), MapError> {
        if self.fail_add_layer || self.reject_layer == Some(layer.id) {
            return Err(MapError::engine("addLayer", "style is not done loading"));
        }
        if !self.sources.iter().any(|(id, _)| id == layer.source) {
            return Err(MapError::engine(
                "addLayer",
                format!("source \"{}\" not found", layer.source),
            ));
        }
        self.layers.push(layer.clone());
        Ok(())
    }

    fn layout_property(&self, layer_id: &str, name: &str) -> Result<Option<String>, MapError> {
        Ok(self
            .layout
            .get(&(layer_id.to_string(), name.to_string()))
            .cloned())
    }

    fn set_layout_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &str,
    ) -> Result<(), MapError> {
        self.layout
            .insert((layer_id.to_string(), name.to_string()), value.to_string());
        Ok(())
    }

    fn projection_name(&self) -> String {
        self.projection.clone()
    }

    fn set_projection(&mut self, projection: Projection) -> Result<(), MapError> {
        self.projection = projection.name().to_string();
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Control {
    pub id: Option<LayerKind>,
    pub label: String,
    pub active: bool,
}

#[derive(Default)]
pub struct RecordingControls {
    pub legend: Vec<LegendSection>,
    pub menu: Vec<Control>,
}

impl RecordingControls {
    pub fn menu_ids(&self) -> Vec<LayerKind> {
        self.menu.iter().filter_map(|c| c.id).collect()
    }

    pub fn entry(&self, kind: LayerKind) -> Option<&Control> {
        self.menu.iter().find(|c| c.id == Some(kind))
    }
}

impl Controls for RecordingControls {
    type Handle = usize;

    fn append_legend_section(&mut self, section: &LegendSection) -> Result<(), MapError> {
        self.legend.push(section.clone());
        Ok(())
    }

    fn append_projection_control(&mut self, label: &str) -> Result<usize, MapError> {
        self.menu.push(Control {
            id: None,
            label: label.to_string(),
            active: false,
        });
        Ok(self.menu.len() - 1)
    }

    fn append_menu_entry(&mut self, kind: LayerKind, active: bool) -> Result<usize, MapError> {
        self.menu.push(Control {
            id: Some(kind),
            label: kind.id().to_string(),
            active,
        });
        Ok(self.menu.len() - 1)
    }

    fn set_label(&mut self, handle: &usize, label: &str) {
        self.menu[*handle].label = label.to_string();
    }

    fn set_active(&mut self, handle: &usize, active: bool) {
        self.menu[*handle].active = active;
    }
}

pub type TestConfigurator = MapConfigurator<RecordingEngine, RecordingControls>;

pub fn feature_collection() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "density": 0.0001 },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
            }
        }]
    })
}

pub fn sources_for(kinds: &[LayerKind]) -> Sources {
    kinds.iter().fold(Sources::default(), |s, k| {
        s.with(*k, SourceData::Inline(feature_collection()))
    })
}

pub fn configurator(kinds: &[LayerKind]) -> TestConfigurator {
    MapConfigurator::new(
        MapConfig::with_sources(sources_for(kinds)),
        RecordingEngine::with_projection("globe"),
        RecordingControls::default(),
    )
}

pub fn loaded(kinds: &[LayerKind]) -> TestConfigurator {
    let mut c = configurator(kinds);
    c.on_load().expect("load");
    c.on_idle().expect("idle");
    c
}
