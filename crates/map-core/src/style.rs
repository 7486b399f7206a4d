//! Fixed paint rules and the source/layer descriptors handed to the engine.
//!
//! Paint values are Mapbox style-spec expressions kept as JSON so they can be
//! passed through to the engine without a typed mirror of the spec.

use crate::config::SourceData;
use crate::constants::*;
use crate::kind::{LayerKind, LayerType};
use serde::Serialize;
use serde_json::{json, Value};

/// `{ type: "geojson", data }` as accepted by `addSource`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SourceSpec<'a> {
    #[serde(rename = "type")]
    pub source_type: &'static str,
    pub data: &'a SourceData,
}

impl<'a> SourceSpec<'a> {
    pub fn geojson(data: &'a SourceData) -> Self {
        Self {
            source_type: "geojson",
            data,
        }
    }
}

/// `{ id, type, source, paint }` as accepted by `addLayer`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayerSpec {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub source: &'static str,
    pub paint: Value,
}

impl LayerSpec {
    /// The single style layer registered for `kind`, reading from the source of
    /// the same name.
    pub fn for_kind(kind: LayerKind) -> Self {
        Self {
            id: kind.id(),
            layer_type: kind.layer_type(),
            source: kind.id(),
            paint: paint_for(kind),
        }
    }
}

pub fn paint_for(kind: LayerKind) -> Value {
    match kind {
        LayerKind::Density => json!({
            "fill-color": density_ramp(),
            "fill-opacity": FILL_OPACITY,
        }),
        LayerKind::Summary => json!({
            "fill-color": summary_match(),
            "fill-opacity": FILL_OPACITY,
        }),
        LayerKind::Envelope => json!({
            "fill-color": ENVELOPE_COLOR,
            "fill-opacity": FILL_OPACITY,
        }),
        LayerKind::Distribution => json!({
            "circle-radius": DISTRIBUTION_RADIUS,
            "circle-opacity": 0,
            "circle-stroke-width": DISTRIBUTION_STROKE_WIDTH,
            "circle-stroke-color": DISTRIBUTION_STROKE_COLOR,
        }),
    }
}

/// Linear interpolation over `DENSITY_RAMP`, teal at zero to orange at the top stop.
pub fn density_ramp() -> Value {
    let mut expr = vec![
        json!("interpolate"),
        json!(["linear"]),
        json!(["get", DENSITY_FIELD]),
    ];
    for (stop, color) in DENSITY_RAMP {
        expr.push(json!(stop));
        expr.push(json!(color));
    }
    Value::Array(expr)
}

/// Categorical color by establishment means; introduced taxa are split again
/// on invasiveness.
pub fn summary_match() -> Value {
    json!([
        "match",
        ["get", ESTABLISHMENT_MEANS_FIELD],
        "native", SUMMARY_NATIVE_COLOR,
        "introduced", [
            "match",
            ["get", INVASIVENESS_FIELD],
            "invasive", SUMMARY_INVASIVE_COLOR,
            "concern", SUMMARY_INTRODUCED_COLOR,
            SUMMARY_INTRODUCED_COLOR
        ],
        "uncertain", SUMMARY_UNCERTAIN_COLOR,
        "none", SUMMARY_UNCERTAIN_COLOR,
        SUMMARY_INTRODUCED_COLOR
    ])
}
