// ============================================================================
// SOPORTE LIST VIEW - Formulario, tabla, detalle y exportación
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, confirm, event_value, on_click, on_input, on_submit, ElementBuilder};
use crate::models::{AlertKind, ExportFormat, Soporte, SoporteField};
use crate::services::trigger_download;
use crate::state::AppState;
use crate::utils::format_fecha;
use crate::viewmodels::{SoporteListState, SoporteListViewModel};
use crate::views::render_alerts;

/// Renderizar vista de soportes
pub fn render_soporte_list(state: &AppState) -> Result<Element, JsValue> {
    let vm = state.soportes.clone();
    let list_state = vm.state();

    let header = ElementBuilder::new("div")?
        .class("view-header")
        .child(ElementBuilder::new("h2")?.text("Gestión de Soportes").build())?
        .child(render_toolbar(&vm, list_state.loading)?)?
        .build();

    let detail = match list_state.selected {
        Some(ref selected) => Some(render_detail(&vm, selected)?),
        None => None,
    };

    Ok(ElementBuilder::new("div")?
        .class("soportes-view")
        .child(header)?
        .child(render_alerts(vm.alerts())?)?
        .child(render_form(&vm, &list_state)?)?
        .child_opt(detail)?
        .child(render_table(&vm, &list_state)?)?
        .build())
}

fn button(label: &str, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .text(label)
        .build())
}

fn render_toolbar(vm: &SoporteListViewModel, loading: bool) -> Result<Element, JsValue> {
    let refresh_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "button")?
        .flag("disabled", loading)?
        .text("🔄 Actualizar")
        .build();
    {
        let vm = vm.clone();
        on_click(&refresh_btn, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.load().await;
            });
        })?;
    }

    let excel_btn = button("📊 Exportar Excel", "btn btn-export")?;
    wire_export(&excel_btn, vm, ExportFormat::Excel)?;
    let pdf_btn = button("📄 Exportar PDF", "btn btn-export")?;
    wire_export(&pdf_btn, vm, ExportFormat::Pdf)?;

    Ok(ElementBuilder::new("div")?
        .class("toolbar")
        .child(refresh_btn)?
        .child(excel_btn)?
        .child(pdf_btn)?
        .build())
}

fn wire_export(btn: &Element, vm: &SoporteListViewModel, format: ExportFormat) -> Result<(), JsValue> {
    let vm = vm.clone();
    on_click(btn, move |_| {
        let vm = vm.clone();
        spawn_local(async move {
            if let Some(download) = vm.export(format).await {
                if let Err(e) = trigger_download(&download) {
                    log::error!("❌ [SOPORTES] Error disparando descarga: {:?}", e);
                    vm.alerts().raise(format.error_message(), AlertKind::Error);
                }
            }
        });
    })
}

fn render_form(vm: &SoporteListViewModel, list_state: &SoporteListState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?.class("soporte-form").build();

    let fields = [
        (SoporteField::Nombre, "nombre", "Nombre", "Nombre completo"),
        (SoporteField::Cedula, "cedula", "Cédula", "Número de cédula"),
        (SoporteField::Direccion, "direccion", "Dirección", "Dirección de entrega"),
    ];
    for (field, id, label, placeholder) in fields {
        let input = ElementBuilder::new("input")?
            .class("form-input")
            .id(id)?
            .attr("type", "text")?
            .attr("placeholder", placeholder)?
            .attr("value", list_state.form.get(field))?
            .build();
        {
            let vm = vm.clone();
            on_input(&input, move |e| vm.set_field(field, event_value(&e)))?;
        }
        let group = ElementBuilder::new("div")?
            .class("form-group")
            .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
            .child(input)?
            .build();
        append_child(&form, &group)?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("➕ Crear Soporte")
        .build();
    append_child(&form, &submit_btn)?;

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                vm.create().await;
            });
        })?;
    }

    Ok(ElementBuilder::new("section")?
        .class("card")
        .child(ElementBuilder::new("h3")?.text("Nuevo Soporte").build())?
        .child(form)?
        .build())
}

fn render_detail(vm: &SoporteListViewModel, soporte: &Soporte) -> Result<Element, JsValue> {
    let rows = [
        ("ID", soporte.id.map(|id| id.to_string()).unwrap_or_default()),
        ("Nombre", soporte.nombre.clone()),
        ("Cédula", soporte.cedula.clone()),
        ("Dirección", soporte.direccion.clone()),
        ("Fecha de creación", format_fecha(soporte.fecha_creacion.as_deref())),
    ];

    let list = ElementBuilder::new("dl")?.class("detail-list").build();
    for (label, value) in rows {
        append_child(&list, &ElementBuilder::new("dt")?.text(label).build())?;
        append_child(&list, &ElementBuilder::new("dd")?.text(&value).build())?;
    }

    let close_btn = button("Cerrar", "btn btn-secondary")?;
    {
        let vm = vm.clone();
        on_click(&close_btn, move |_| vm.close_detail())?;
    }

    Ok(ElementBuilder::new("section")?
        .class("card soporte-detail")
        .child(ElementBuilder::new("h3")?.text("Detalle del Soporte").build())?
        .child(list)?
        .child(close_btn)?
        .build())
}

fn render_table(vm: &SoporteListViewModel, list_state: &SoporteListState) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .class("card")
        .child(ElementBuilder::new("h3")?.text("Lista de Soportes").build())?
        .build();

    if list_state.loading {
        append_child(
            &section,
            &ElementBuilder::new("p")?.class("loading").text("Cargando datos...").build(),
        )?;
        return Ok(section);
    }
    if list_state.soportes.is_empty() {
        append_child(
            &section,
            &ElementBuilder::new("p")?
                .class("empty-state")
                .text("No hay soportes registrados")
                .build(),
        )?;
        return Ok(section);
    }

    let head_row = ElementBuilder::new("tr")?.build();
    for title in ["ID", "Nombre", "Cédula", "Dirección", "Fecha de creación", "Acciones"] {
        append_child(&head_row, &ElementBuilder::new("th")?.text(title).build())?;
    }
    let thead = ElementBuilder::new("thead")?.child(head_row)?.build();

    let tbody = ElementBuilder::new("tbody")?.build();
    for soporte in &list_state.soportes {
        append_child(&tbody, &render_row(vm, soporte)?)?;
    }

    let table = ElementBuilder::new("table")?
        .class("soportes-table")
        .child(thead)?
        .child(tbody)?
        .build();
    append_child(&section, &table)?;
    Ok(section)
}

fn render_row(vm: &SoporteListViewModel, soporte: &Soporte) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();
    let cells = [
        soporte.id.map(|id| id.to_string()).unwrap_or_default(),
        soporte.nombre.clone(),
        soporte.cedula.clone(),
        soporte.direccion.clone(),
        format_fecha(soporte.fecha_creacion.as_deref()),
    ];
    for value in cells {
        append_child(&row, &ElementBuilder::new("td")?.text(&value).build())?;
    }

    let actions = ElementBuilder::new("td")?.class("actions").build();
    if let Some(id) = soporte.id {
        let view_btn = button("👁️ Ver", "btn btn-small")?;
        {
            let vm = vm.clone();
            on_click(&view_btn, move |_| {
                let vm = vm.clone();
                spawn_local(async move {
                    vm.show(id).await;
                });
            })?;
        }

        let delete_btn = button("🗑️ Eliminar", "btn btn-small btn-danger")?;
        {
            let vm = vm.clone();
            on_click(&delete_btn, move |_| {
                let vm = vm.clone();
                spawn_local(async move {
                    vm.delete(id, confirm).await;
                });
            })?;
        }

        append_child(&actions, &view_btn)?;
        append_child(&actions, &delete_btn)?;
    }
    append_child(&row, &actions)?;
    Ok(row)
}
