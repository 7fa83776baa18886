// ============================================================================
// ALERTS VIEW - Proyección de la cola de alertas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AlertQueue;
use crate::utils::now_ms;

pub fn render_alerts(queue: &AlertQueue) -> Result<Element, JsValue> {
    // Barrido por si algún timer se perdió (pestaña suspendida)
    queue.expire_due(now_ms());

    let container = ElementBuilder::new("div")?
        .class("alerts-container")
        .build();

    for alert in queue.alerts() {
        let item = ElementBuilder::new("div")?
            .class(&alert.kind.css_class())
            .attr("role", "alert")?
            .child(ElementBuilder::new("span")?.text(&alert.message).build())?
            .build();

        let close_btn = ElementBuilder::new("button")?
            .class("alert-close")
            .attr("type", "button")?
            .attr("aria-label", "Cerrar")?
            .text("×")
            .build();
        {
            let queue = queue.clone();
            let id = alert.id;
            on_click(&close_btn, move |_| {
                queue.dismiss(id);
            })?;
        }

        append_child(&item, &close_btn)?;
        append_child(&container, &item)?;
    }

    Ok(container)
}
