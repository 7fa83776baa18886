// ============================================================================
// HOME VIEW - Página de inicio
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::Route;

const FEATURES: [(&str, &str, &str); 4] = [
    ("📋", "Registro de Soportes", "Registra y gestiona solicitudes de soporte de manera eficiente"),
    ("📁", "Carga Masiva", "Importa múltiples registros desde archivos Excel"),
    ("🔍", "Consulta Rápida", "Busca y visualiza tus soportes registrados"),
    ("📊", "Reportes", "Genera reportes en Excel y PDF de los soportes registrados"),
];

const STATS: [(&str, &str); 3] = [
    ("500+", "Entregas Realizadas"),
    ("98%", "Satisfacción"),
    ("24/7", "Disponibilidad"),
];

fn link_button(route: Route, label: &str, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", route.hash())?
        .text(label)
        .build())
}

/// Renderizar página de inicio
pub fn render_home() -> Result<Element, JsValue> {
    let hero = ElementBuilder::new("section")?
        .class("hero")
        .child(ElementBuilder::new("h1")?.text("Sistema de Gestión de Soportes").build())?
        .child(
            ElementBuilder::new("p")?
                .class("hero-subtitle")
                .text("Administra tus soportes de entrega de forma rápida y sencilla")
                .build(),
        )?
        .build();

    let actions = ElementBuilder::new("div")?
        .class("hero-actions")
        .child(link_button(Route::Soportes, "📋 Ver Soportes", "btn btn-primary")?)?
        .child(link_button(Route::UploadExcel, "📁 Carga Masiva", "btn btn-secondary")?)?
        .build();
    append_child(&hero, &actions)?;

    let cards = FEATURES
        .iter()
        .map(|(icono, titulo, descripcion)| {
            Ok(ElementBuilder::new("div")?
                .class("feature-card")
                .child(ElementBuilder::new("div")?.class("feature-icon").text(icono).build())?
                .child(ElementBuilder::new("h3")?.text(titulo).build())?
                .child(ElementBuilder::new("p")?.text(descripcion).build())?
                .build())
        })
        .collect::<Result<Vec<Element>, JsValue>>()?;
    let features = ElementBuilder::new("section")?
        .class("features")
        .children(cards)?
        .build();

    let stat_items = STATS
        .iter()
        .map(|(valor, etiqueta)| {
            Ok(ElementBuilder::new("div")?
                .class("stat")
                .child(ElementBuilder::new("strong")?.text(valor).build())?
                .child(ElementBuilder::new("span")?.text(etiqueta).build())?
                .build())
        })
        .collect::<Result<Vec<Element>, JsValue>>()?;
    let stats = ElementBuilder::new("section")?
        .class("stats")
        .children(stat_items)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("home-view")
        .child(hero)?
        .child(features)?
        .child(stats)?
        .build())
}
