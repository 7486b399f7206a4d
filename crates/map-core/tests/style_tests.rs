use map_core::{
    legend, paint_for, LayerKind, LayerSpec, LayerType, Projection, Visibility, DENSITY_RAMP,
    ENVELOPE_COLOR,
};
use serde_json::json;

#[test]
fn layer_kinds_display_as_their_ids() {
    let ids: Vec<String> = LayerKind::ALL.iter().map(|k| k.to_string()).collect();
    assert_eq!(ids, vec!["density", "summary", "envelope", "distribution"]);
    for kind in LayerKind::ALL {
        assert_eq!(kind.to_string(), kind.id());
    }
}

#[test]
fn only_distribution_is_a_circle_layer() {
    assert_eq!(LayerKind::Distribution.layer_type(), LayerType::Circle);
    for kind in [LayerKind::Density, LayerKind::Summary, LayerKind::Envelope] {
        assert_eq!(kind.layer_type(), LayerType::Fill);
    }
}

#[test]
fn layer_spec_serializes_for_add_layer() {
    let value = serde_json::to_value(LayerSpec::for_kind(LayerKind::Envelope)).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "envelope",
            "type": "fill",
            "source": "envelope",
            "paint": { "fill-color": "rgb(85, 135, 173)", "fill-opacity": 0.5 }
        })
    );
}

#[test]
fn density_ramp_stops_ascend() {
    let paint = paint_for(LayerKind::Density);
    let expr = paint["fill-color"].as_array().unwrap();
    assert_eq!(expr.len(), 3 + 2 * DENSITY_RAMP.len());

    let stops: Vec<f64> = expr[3..].iter().step_by(2).map(|v| v.as_f64().unwrap()).collect();
    assert!(stops.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(stops[0], 0.0);
    assert_eq!(paint["fill-opacity"], 0.5);
}

#[test]
fn summary_splits_introduced_by_invasiveness() {
    let paint = paint_for(LayerKind::Summary);
    let expr = &paint["fill-color"];
    assert_eq!(expr[0], "match");
    assert_eq!(expr[1], json!(["get", "establishmentMeans"]));
    assert_eq!(expr[2], "native");
    assert_eq!(expr[3], "rgb(171, 196, 147)");
    assert_eq!(expr[4], "introduced");
    assert_eq!(expr[5][1], json!(["get", "invasiveness"]));
    assert_eq!(expr[5][3], "rgb(245, 66, 93)");
    assert_eq!(expr[6], "uncertain");
    assert_eq!(expr[8], "none");
    assert_eq!(expr[7], expr[9]);
    assert_eq!(expr[10], "rgb(237, 167, 69)");
}

#[test]
fn distribution_is_stroke_only() {
    let paint = paint_for(LayerKind::Distribution);
    assert_eq!(paint["circle-opacity"], 0);
    assert_eq!(paint["circle-radius"], 2.0);
    assert_eq!(paint["circle-stroke-width"], 1.2);
    assert_eq!(paint["circle-stroke-color"], "#000");
}

#[test]
fn legend_matches_paint_colors() {
    let envelope = legend::section_for(LayerKind::Envelope).unwrap();
    assert_eq!(envelope.title, "Envelopes");
    assert_eq!(envelope.entries.len(), 1);
    assert_eq!(envelope.entries[0].label, "thermal");
    assert_eq!(envelope.entries[0].color, ENVELOPE_COLOR);

    let summary = legend::section_for(LayerKind::Summary).unwrap();
    let labels: Vec<&str> = summary.entries.iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["native", "introduced", "invasive", "uncertain"]);
    let paint = paint_for(LayerKind::Summary).to_string();
    for entry in &summary.entries {
        assert!(paint.contains(entry.color), "{}", entry.color);
    }

    assert!(legend::section_for(LayerKind::Density).is_none());
    assert!(legend::section_for(LayerKind::Distribution).is_none());
}

#[test]
fn undefined_visibility_counts_as_visible() {
    assert_eq!(Visibility::from_layout(None), Visibility::Visible);
    assert_eq!(Visibility::from_layout(Some("visible")), Visibility::Visible);
    assert_eq!(Visibility::from_layout(Some("none")), Visibility::Hidden);
    assert_eq!(Visibility::Visible.toggled().as_layout(), "none");
    assert_eq!(Visibility::Hidden.toggled().as_layout(), "visible");
}

#[test]
fn projection_names() {
    assert_eq!(Projection::toggled_from("globe"), Projection::EqualEarth);
    assert_eq!(Projection::toggled_from("equalEarth"), Projection::Globe);
    assert_eq!(Projection::toggled_from("mercator"), Projection::Globe);
    assert_eq!(Projection::Globe.name(), "globe");
    assert_eq!(Projection::EqualEarth.name(), "equalEarth");
}
