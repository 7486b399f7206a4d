use crate::kind::LayerKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid map configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("source `{kind}` is not valid GeoJSON: {reason}")]
    MalformedSource { kind: LayerKind, reason: String },

    #[error("map engine failed in {op}: {message}")]
    Engine { op: &'static str, message: String },

    #[error("DOM operation {op} failed: {message}")]
    Dom { op: &'static str, message: String },

    #[error("missing #{0} element")]
    MissingElement(String),

    #[error("no menu entry for layer `{0}`")]
    UnknownLayer(LayerKind),
}

impl MapError {
    pub fn engine(op: &'static str, message: impl Into<String>) -> Self {
        MapError::Engine {
            op,
            message: message.into(),
        }
    }

    pub fn dom(op: &'static str, message: impl Into<String>) -> Self {
        MapError::Dom {
            op,
            message: message.into(),
        }
    }
}
