// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Hash actual de la URL (`#/soportes`, ...)
pub fn location_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn set_location_hash(hash: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_hash(hash)
}

/// `window.confirm`; si no hay window se trata como cancelado
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Desplaza la página hasta el elemento, si existe
pub fn scroll_into_view(id: &str) {
    if let Some(element) = get_element_by_id(id) {
        element.scroll_into_view();
    }
}

/// Input enfocado antes de un re-render: id + posición del cursor
pub struct FocusSnapshot {
    id: String,
    caret: Option<u32>,
}

/// Guarda el foco actual si está en un elemento con id
pub fn capture_focus() -> Option<FocusSnapshot> {
    let active = document()?.active_element()?;
    let id = active.id();
    if id.is_empty() {
        return None;
    }
    // Inputs sin selección (file, number) lanzan excepción: se ignora el cursor
    let caret = active
        .dyn_ref::<HtmlInputElement>()
        .and_then(|input| input.selection_start().ok().flatten());
    Some(FocusSnapshot { id, caret })
}

/// Devuelve el foco al nodo equivalente del DOM nuevo
pub fn restore_focus(snapshot: &FocusSnapshot) {
    let Some(element) = get_element_by_id(&snapshot.id) else {
        return;
    };
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if html.focus().is_err() {
        return;
    }
    if let (Some(input), Some(pos)) = (element.dyn_ref::<HtmlInputElement>(), snapshot.caret) {
        let _ = input.set_selection_range(pos, pos);
    }
}
