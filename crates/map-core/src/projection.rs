use serde::{Deserialize, Serialize};

/// Global projection modes the toggle alternates between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Projection {
    #[default]
    Globe,
    EqualEarth,
}

impl Projection {
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Projection::Globe => "globe",
            Projection::EqualEarth => "equalEarth",
        }
    }

    /// Mode to switch to given the engine's current projection name.
    ///
    /// Only `globe` leads to `equalEarth`; any other name (including ones set
    /// outside the toggle, e.g. `mercator`) goes back to `globe`.
    #[inline]
    pub fn toggled_from(current: &str) -> Self {
        if current == Projection::Globe.name() {
            Projection::EqualEarth
        } else {
            Projection::Globe
        }
    }
}
