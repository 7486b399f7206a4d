//! Per-layer visibility state for the layer menu.

use crate::kind::LayerKind;
use fnv::FnvHashMap;

/// Value of a layer's `visibility` layout property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Read the engine's layout value. An unset property means the layer is
    /// drawn, so `None` folds into `Visible`.
    #[inline]
    pub fn from_layout(value: Option<&str>) -> Self {
        match value {
            None | Some("visible") => Visibility::Visible,
            Some(_) => Visibility::Hidden,
        }
    }

    #[inline]
    pub fn as_layout(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "none",
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Menu control for one layer and whether it is currently marked active.
#[derive(Clone, Debug)]
pub struct ToggleState<H> {
    pub handle: H,
    pub active: bool,
}

/// Layer id -> menu control, so repeated idle events never duplicate entries.
#[derive(Debug)]
pub struct MenuRegistry<H> {
    entries: FnvHashMap<LayerKind, ToggleState<H>>,
}

impl<H> Default for MenuRegistry<H> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<H> MenuRegistry<H> {
    #[inline]
    pub fn contains(&self, kind: LayerKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn insert(&mut self, kind: LayerKind, handle: H, active: bool) {
        self.entries.insert(kind, ToggleState { handle, active });
    }

    #[inline]
    pub fn get(&self, kind: LayerKind) -> Option<&ToggleState<H>> {
        self.entries.get(&kind)
    }

    #[inline]
    pub fn get_mut(&mut self, kind: LayerKind) -> Option<&mut ToggleState<H>> {
        self.entries.get_mut(&kind)
    }

    #[inline]
    pub fn is_active(&self, kind: LayerKind) -> Option<bool> {
        self.get(kind).map(|s| s.active)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
