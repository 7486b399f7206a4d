use crate::constants::{
    CONTROL_HREF, LEGEND_ID, LEGEND_KEY_CLASS, MENU_ID, PROJECTION_TOGGLE_CLASS, SUBLEGEND_CLASS,
};
use crate::mapbox::js_message;
use crate::ui;
use map_core::{Controls, LayerKind, LegendSection, MapError};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Result<web::Element, MapError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MapError::MissingElement(id.to_string()))
}

/// Run `handler` on click, keeping the `#` anchor from navigating.
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        handler();
    }) as Box<dyn FnMut(_)>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Legend and menu built under the page's `#legend` and `#menu` elements.
pub struct DomControls {
    document: web::Document,
    legend: web::Element,
    menu: web::Element,
}

impl DomControls {
    pub fn new(document: &web::Document) -> Result<Self, MapError> {
        Ok(Self {
            document: document.clone(),
            legend: element_by_id(document, LEGEND_ID)?,
            menu: element_by_id(document, MENU_ID)?,
        })
    }

    fn create(&self, tag: &str) -> Result<web::Element, MapError> {
        self.document
            .create_element(tag)
            .map_err(|e| MapError::dom("createElement", js_message(&e)))
    }

    fn anchor(&self, text: &str, class: &str) -> Result<web::Element, MapError> {
        let link = self.create("a")?;
        _ = link.set_attribute("href", CONTROL_HREF);
        link.set_text_content(Some(text));
        link.set_class_name(class);
        Ok(link)
    }
}

fn append(parent: &web::Element, child: &web::Element) -> Result<(), MapError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| MapError::dom("appendChild", js_message(&e)))
}

impl Controls for DomControls {
    type Handle = web::Element;

    fn append_legend_section(&mut self, section: &LegendSection) -> Result<(), MapError> {
        let block = self.create("div")?;
        block.set_class_name(SUBLEGEND_CLASS);
        let title = self.create("p")?;
        title.set_text_content(Some(section.title));
        append(&block, &title)?;

        for entry in &section.entries {
            let item = self.create("div")?;
            let key = self.create("span")?;
            key.set_class_name(LEGEND_KEY_CLASS);
            _ = key.set_attribute("style", &ui::swatch_style(entry.color));
            let value = self.create("span")?;
            value.set_text_content(Some(entry.label));
            append(&item, &key)?;
            append(&item, &value)?;
            append(&block, &item)?;
        }
        append(&self.legend, &block)
    }

    fn append_projection_control(&mut self, label: &str) -> Result<web::Element, MapError> {
        let link = self.anchor(label, PROJECTION_TOGGLE_CLASS)?;
        append(&self.menu, &link)?;
        Ok(link)
    }

    fn append_menu_entry(
        &mut self,
        kind: LayerKind,
        active: bool,
    ) -> Result<web::Element, MapError> {
        let link = self.anchor(kind.id(), ui::menu_class(active))?;
        link.set_id(kind.id());
        append(&self.menu, &link)?;
        Ok(link)
    }

    fn set_label(&mut self, handle: &web::Element, label: &str) {
        handle.set_text_content(Some(label));
    }

    fn set_active(&mut self, handle: &web::Element, active: bool) {
        handle.set_class_name(ui::menu_class(active));
    }
}
