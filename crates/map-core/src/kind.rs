use serde::Serialize;
use std::fmt;

/// Thematic overlays the map knows how to style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Density,
    Summary,
    Envelope,
    Distribution,
}

impl LayerKind {
    /// Canonical order used for source registration and the layer menu.
    pub const ALL: [LayerKind; 4] = [
        LayerKind::Density,
        LayerKind::Summary,
        LayerKind::Envelope,
        LayerKind::Distribution,
    ];

    /// Bottom-to-top stacking order of the style layers.
    pub const DRAW_ORDER: [LayerKind; 4] = [
        LayerKind::Envelope,
        LayerKind::Density,
        LayerKind::Summary,
        LayerKind::Distribution,
    ];

    /// Identifier shared by the source, the style layer and the menu entry.
    #[inline]
    pub fn id(self) -> &'static str {
        match self {
            LayerKind::Density => "density",
            LayerKind::Summary => "summary",
            LayerKind::Envelope => "envelope",
            LayerKind::Distribution => "distribution",
        }
    }

    #[inline]
    pub fn layer_type(self) -> LayerType {
        match self {
            LayerKind::Distribution => LayerType::Circle,
            _ => LayerType::Fill,
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Engine layer types used by the fixed paint rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Fill,
    Circle,
}
