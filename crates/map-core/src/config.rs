//! Declarative map configuration.
//!
//! The JS caller hands over `{ sources: { density?, summary?, envelope?,
//! distribution? }, view?, accessToken? }`. Each source is either an inline
//! GeoJSON object or a URL the engine fetches itself. Missing and falsy
//! entries mean "this layer is not shown" and are never an error.

use crate::constants::{DEFAULT_CENTER, DEFAULT_CONTAINER, DEFAULT_STYLE_URL, DEFAULT_ZOOM};
use crate::error::MapError;
use crate::kind::LayerKind;
use crate::projection::Projection;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const GEOMETRY_TYPES: [&str; 6] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
];

/// Payload of a single GeoJSON source.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceData {
    Url(String),
    Inline(Value),
}

impl SourceData {
    /// Interpret a raw JSON value, folding JS-falsy values into absence.
    pub fn from_value(value: Value) -> Option<Self> {
        if is_falsy(&value) {
            return None;
        }
        match value {
            Value::String(url) => Some(SourceData::Url(url)),
            other => Some(SourceData::Inline(other)),
        }
    }

    /// Structural GeoJSON check for inline payloads; URLs are left to the engine.
    pub fn validate(&self, kind: LayerKind) -> Result<(), MapError> {
        match self {
            SourceData::Url(_) => Ok(()),
            SourceData::Inline(value) => {
                validate_geojson(value).map_err(|reason| MapError::MalformedSource { kind, reason })
            }
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn validate_geojson(value: &Value) -> Result<(), String> {
    let obj = value
        .as_object()
        .ok_or_else(|| "expected a GeoJSON object".to_string())?;
    let ty = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| "missing string `type` member".to_string())?;
    match ty {
        "FeatureCollection" => {
            let features = obj
                .get("features")
                .and_then(Value::as_array)
                .ok_or_else(|| "FeatureCollection without a `features` array".to_string())?;
            for (i, feature) in features.iter().enumerate() {
                validate_feature(feature).map_err(|e| format!("features[{i}]: {e}"))?;
            }
            Ok(())
        }
        "Feature" => validate_feature(value),
        _ => validate_geometry(value),
    }
}

fn validate_feature(value: &Value) -> Result<(), String> {
    let obj = value
        .as_object()
        .ok_or_else(|| "expected a Feature object".to_string())?;
    if obj.get("type").and_then(Value::as_str) != Some("Feature") {
        return Err("expected `type` to be \"Feature\"".to_string());
    }
    match obj.get("geometry") {
        None => Err("Feature without a `geometry` member".to_string()),
        Some(Value::Null) => Ok(()),
        Some(geometry) => validate_geometry(geometry),
    }
}

fn validate_geometry(value: &Value) -> Result<(), String> {
    let obj = value
        .as_object()
        .ok_or_else(|| "expected a geometry object".to_string())?;
    let ty = obj.get("type").and_then(Value::as_str).unwrap_or_default();
    if ty == "GeometryCollection" {
        let geometries = obj
            .get("geometries")
            .and_then(Value::as_array)
            .ok_or_else(|| "GeometryCollection without a `geometries` array".to_string())?;
        return geometries.iter().try_for_each(validate_geometry);
    }
    if !GEOMETRY_TYPES.contains(&ty) {
        return Err(format!("unsupported GeoJSON type {ty:?}"));
    }
    match obj.get("coordinates") {
        Some(Value::Array(_)) => Ok(()),
        _ => Err(format!("{ty} without a `coordinates` array")),
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<SourceData>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(SourceData::from_value(value))
}

/// Optional payload per layer kind.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Sources {
    #[serde(default, deserialize_with = "present")]
    pub density: Option<SourceData>,
    #[serde(default, deserialize_with = "present")]
    pub summary: Option<SourceData>,
    #[serde(default, deserialize_with = "present")]
    pub envelope: Option<SourceData>,
    #[serde(default, deserialize_with = "present")]
    pub distribution: Option<SourceData>,
}

impl Sources {
    #[inline]
    pub fn get(&self, kind: LayerKind) -> Option<&SourceData> {
        match kind {
            LayerKind::Density => self.density.as_ref(),
            LayerKind::Summary => self.summary.as_ref(),
            LayerKind::Envelope => self.envelope.as_ref(),
            LayerKind::Distribution => self.distribution.as_ref(),
        }
    }

    #[inline]
    pub fn contains(&self, kind: LayerKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn set(&mut self, kind: LayerKind, data: Option<SourceData>) {
        let slot = match kind {
            LayerKind::Density => &mut self.density,
            LayerKind::Summary => &mut self.summary,
            LayerKind::Envelope => &mut self.envelope,
            LayerKind::Distribution => &mut self.distribution,
        };
        *slot = data;
    }

    pub fn with(mut self, kind: LayerKind, data: SourceData) -> Self {
        self.set(kind, Some(data));
        self
    }

    /// Present kinds in canonical order.
    pub fn kinds(&self) -> impl Iterator<Item = LayerKind> + '_ {
        LayerKind::ALL.into_iter().filter(|k| self.contains(*k))
    }

    pub fn validate(&self) -> Result<(), MapError> {
        for kind in self.kinds() {
            if let Some(data) = self.get(kind) {
                data.validate(kind)?;
            }
        }
        Ok(())
    }
}

/// Options passed to the engine's map constructor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewOptions {
    pub container: String,
    pub style: String,
    pub center: [f64; 2],
    pub zoom: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    pub attribution_control: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            style: DEFAULT_STYLE_URL.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            projection: Some(Projection::Globe),
            attribution_control: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    #[serde(default)]
    pub sources: Sources,
    #[serde(default)]
    pub view: ViewOptions,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl MapConfig {
    pub fn from_json_str(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_sources(sources: Sources) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }
}
