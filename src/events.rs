use crate::constants::{IDLE_EVENT, LOAD_EVENT};
use crate::dom::{self, DomControls};
use crate::mapbox::{Map, MapboxEngine};
use map_core::{LayerKind, MapConfigurator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedConfigurator = Rc<RefCell<Configurator>>;

type Configurator = MapConfigurator<MapboxEngine, DomControls>;

// Setup result: the projection control, only on the load that created it
fn run_load(c: &mut Configurator) -> Option<web::Element> {
    let first = !c.is_loaded();
    if let Err(e) = c.on_load() {
        log::error!("[load] setup failed: {}", e);
        return None;
    }
    if first {
        c.projection_control().cloned()
    } else {
        None
    }
}

// Entries created by this idle cycle, paired with their elements
fn run_idle(c: &mut Configurator) -> Vec<(LayerKind, web::Element)> {
    match c.on_idle() {
        Ok(kinds) => kinds
            .into_iter()
            .filter_map(|kind| c.menu().get(kind).map(|s| (kind, s.handle.clone())))
            .collect(),
        Err(e) => {
            log::error!("[idle] menu sync failed: {}", e);
            Vec::new()
        }
    }
}

pub fn wire_load(map: &Map, configurator: SharedConfigurator) {
    let closure = Closure::wrap(Box::new(move || {
        let control = match configurator.try_borrow_mut() {
            Ok(mut c) => run_load(&mut c),
            Err(_) => {
                log::warn!("[load] configurator busy; skipping");
                return;
            }
        };
        if let Some(control) = control {
            wire_projection_click(&control, configurator.clone());
        }
    }) as Box<dyn FnMut()>);
    map.on(LOAD_EVENT, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_idle(map: &Map, configurator: SharedConfigurator) {
    let closure = Closure::wrap(Box::new(move || {
        let created = match configurator.try_borrow_mut() {
            Ok(mut c) => run_idle(&mut c),
            Err(_) => {
                log::warn!("[idle] configurator busy; skipping");
                return;
            }
        };
        for (kind, element) in created {
            wire_layer_click(&element, kind, configurator.clone());
        }
    }) as Box<dyn FnMut()>);
    map.on(IDLE_EVENT, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_layer_click(element: &web::Element, kind: LayerKind, configurator: SharedConfigurator) {
    dom::add_click_listener(element, move || match configurator.try_borrow_mut() {
        Ok(mut c) => {
            if let Err(e) = c.click_layer(kind) {
                log::error!("[menu] toggling {} failed: {}", kind, e);
            }
        }
        Err(_) => log::warn!("[menu] configurator busy; ignoring click on {}", kind),
    });
}

fn wire_projection_click(element: &web::Element, configurator: SharedConfigurator) {
    dom::add_click_listener(element, move || match configurator.try_borrow_mut() {
        Ok(mut c) => {
            if let Err(e) = c.click_projection() {
                log::error!("[projection] switch failed: {}", e);
            }
        }
        Err(_) => log::warn!("[projection] configurator busy; ignoring click"),
    });
}
