//! Event-driven setup of sources, layers, legend and menu.
//!
//! The configurator owns no rendering or DOM code. It drives a [`MapEngine`]
//! (sources, layers, layout properties, projection) and a [`Controls`] host
//! (legend and menu elements) in response to the engine's `load` and `idle`
//! events and to clicks on the controls it created.

use crate::config::MapConfig;
use crate::constants::VISIBILITY_PROPERTY;
use crate::error::MapError;
use crate::kind::LayerKind;
use crate::legend::{self, LegendSection};
use crate::projection::Projection;
use crate::style::{LayerSpec, SourceSpec};
use crate::toggle::{MenuRegistry, Visibility};
use smallvec::SmallVec;

/// Operations the configurator needs from the rendering engine.
pub trait MapEngine {
    fn add_source(&mut self, id: &str, source: &SourceSpec<'_>) -> Result<(), MapError>;
    fn add_layer(&mut self, layer: &LayerSpec) -> Result<(), MapError>;
    fn layout_property(&self, layer_id: &str, name: &str) -> Result<Option<String>, MapError>;
    fn set_layout_property(
        &mut self,
        layer_id: &str,
        name: &str,
        value: &str,
    ) -> Result<(), MapError>;
    fn projection_name(&self) -> String;
    fn set_projection(&mut self, projection: Projection) -> Result<(), MapError>;
}

/// Legend and menu elements the configurator creates and updates.
pub trait Controls {
    type Handle;

    fn append_legend_section(&mut self, section: &LegendSection) -> Result<(), MapError>;
    fn append_projection_control(&mut self, label: &str) -> Result<Self::Handle, MapError>;
    fn append_menu_entry(
        &mut self,
        kind: LayerKind,
        active: bool,
    ) -> Result<Self::Handle, MapError>;
    fn set_label(&mut self, handle: &Self::Handle, label: &str);
    fn set_active(&mut self, handle: &Self::Handle, active: bool);
}

pub struct MapConfigurator<E, C: Controls> {
    config: MapConfig,
    engine: E,
    controls: C,
    menu: MenuRegistry<C::Handle>,
    // Kinds whose style layer the engine accepted; only these get a menu entry
    layers: SmallVec<[LayerKind; 4]>,
    projection_control: Option<C::Handle>,
    loaded: bool,
}

impl<E: MapEngine, C: Controls> MapConfigurator<E, C> {
    pub fn new(config: MapConfig, engine: E, controls: C) -> Self {
        Self {
            config,
            engine,
            controls,
            menu: MenuRegistry::default(),
            layers: SmallVec::new(),
            projection_control: None,
            loaded: false,
        }
    }

    /// One-time setup run from the engine's `load` event.
    ///
    /// Every present source is registered before any layer references it;
    /// layers then go in draw order with their legend section appended inline.
    /// Inline payloads are validated first so a malformed one leaves the
    /// engine untouched.
    pub fn on_load(&mut self) -> Result<(), MapError> {
        if self.loaded {
            log::warn!("[map] load fired again; setup already done");
            return Ok(());
        }
        self.config.sources.validate()?;

        for kind in self.config.sources.kinds() {
            if let Some(data) = self.config.sources.get(kind) {
                self.engine.add_source(kind.id(), &SourceSpec::geojson(data))?;
                log::debug!("[map] source added id={}", kind);
            }
        }

        for kind in LayerKind::DRAW_ORDER {
            if !self.config.sources.contains(kind) {
                continue;
            }
            self.engine.add_layer(&LayerSpec::for_kind(kind))?;
            self.layers.push(kind);
            if let Some(section) = legend::section_for(kind) {
                self.controls.append_legend_section(&section)?;
            }
            log::info!("[map] layer added id={} type={:?}", kind, kind.layer_type());
        }

        let label = self.engine.projection_name();
        self.projection_control = Some(self.controls.append_projection_control(&label)?);
        self.loaded = true;
        Ok(())
    }

    /// Menu sync run on every `idle` event. Returns the kinds whose entry was
    /// created by this call; entries that already exist are left alone.
    ///
    /// Only kinds whose layer was added get an entry, so an idle before `load`
    /// or after a failed `load` creates nothing for the missing layers.
    pub fn on_idle(&mut self) -> Result<SmallVec<[LayerKind; 4]>, MapError> {
        let mut created = SmallVec::new();
        for kind in self.config.sources.kinds() {
            if self.menu.contains(kind) || !self.layers.contains(&kind) {
                continue;
            }
            let handle = self.controls.append_menu_entry(kind, true)?;
            self.menu.insert(kind, handle, true);
            created.push(kind);
        }
        if !created.is_empty() {
            log::info!("[map] menu entries created: {:?}", created.as_slice());
        }
        Ok(created)
    }

    /// Flip a layer between visible and hidden, writing the engine property
    /// and the control's active state together.
    pub fn click_layer(&mut self, kind: LayerKind) -> Result<Visibility, MapError> {
        let entry = self
            .menu
            .get_mut(kind)
            .ok_or(MapError::UnknownLayer(kind))?;
        let current = self.engine.layout_property(kind.id(), VISIBILITY_PROPERTY)?;
        let next = Visibility::from_layout(current.as_deref()).toggled();
        self.engine
            .set_layout_property(kind.id(), VISIBILITY_PROPERTY, next.as_layout())?;
        self.controls.set_active(&entry.handle, next.is_visible());
        entry.active = next.is_visible();
        log::debug!("[map] layer {} -> {}", kind, next.as_layout());
        Ok(next)
    }

    /// Switch between globe and equal-earth based on the engine's current
    /// projection, relabelling the control with the new mode.
    pub fn click_projection(&mut self) -> Result<Projection, MapError> {
        let next = Projection::toggled_from(&self.engine.projection_name());
        self.engine.set_projection(next)?;
        if let Some(handle) = &self.projection_control {
            self.controls.set_label(handle, next.name());
        }
        log::debug!("[map] projection -> {}", next.name());
        Ok(next)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn menu(&self) -> &MenuRegistry<C::Handle> {
        &self.menu
    }

    pub fn projection_control(&self) -> Option<&C::Handle> {
        self.projection_control.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
