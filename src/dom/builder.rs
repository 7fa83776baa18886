// ============================================================================
// ELEMENT BUILDER - Construcción encadenada de nodos para las vistas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, set_attribute};

/// Envuelve un `Element` recién creado; cada método devuelve el builder
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        self.attr("id", id)
    }

    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Atributo booleano (`disabled`, `required`...) solo si `enabled`
    pub fn flag(self, name: &str, enabled: bool) -> Result<Self, JsValue> {
        if enabled {
            return self.attr(name, "");
        }
        Ok(self)
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// Hijo opcional: paneles que solo existen con cierto estado
    pub fn child_opt(self, child: Option<Element>) -> Result<Self, JsValue> {
        match child {
            Some(child) => self.child(child),
            None => Ok(self),
        }
    }

    /// Agrega varios hijos en orden (filas, tarjetas, items de lista)
    pub fn children<I>(self, children: I) -> Result<Self, JsValue>
    where
        I: IntoIterator<Item = Element>,
    {
        for child in children {
            append_child(&self.element, &child)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
