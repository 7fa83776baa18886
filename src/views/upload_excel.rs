// ============================================================================
// UPLOAD EXCEL VIEW - Carga masiva con progreso y resumen
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, event_input, event_value, on_change, on_input, on_submit, ElementBuilder};
use crate::models::{ExcelFile, UploadResult};
use crate::viewmodels::{UploadProgress, UploadState, UploadViewModel};
use crate::state::AppState;
use crate::views::render_alerts;

/// ID del bloque de resultados (destino del scroll tras la carga)
pub const RESULTS_ID: &str = "upload-results";

const COLUMNAS: [(&str, &str); 3] = [
    ("nombre", "Nombre completo (mínimo 3 caracteres)"),
    ("cedula", "Número de cédula (mínimo 5 caracteres, único)"),
    ("direccion", "Dirección de entrega (mínimo 5 caracteres)"),
];

/// Renderizar vista de carga masiva
pub fn render_upload_excel(state: &AppState) -> Result<Element, JsValue> {
    let vm = state.upload.clone();
    let upload_state = vm.state();

    let progress = if upload_state.progress.is_visible() {
        Some(render_progress(&upload_state.progress)?)
    } else {
        None
    };
    let results = match upload_state.results {
        Some(ref results) => Some(render_results(results)?),
        None => None,
    };

    Ok(ElementBuilder::new("div")?
        .class("upload-view")
        .child(ElementBuilder::new("h2")?.text("Carga Masiva de Soportes").build())?
        .child(render_alerts(vm.alerts())?)?
        .child(render_instructions()?)?
        .child(render_form(&vm, &upload_state)?)?
        .child_opt(progress)?
        .child_opt(results)?
        .build())
}

fn render_instructions() -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ul")?.build();
    for (columna, descripcion) in COLUMNAS {
        let item = ElementBuilder::new("li")?
            .child(ElementBuilder::new("code")?.text(columna).build())?
            .child(ElementBuilder::new("span")?.text(&format!(": {}", descripcion)).build())?
            .build();
        append_child(&list, &item)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("card instructions")
        .child(ElementBuilder::new("h3")?.text("📋 Formato del archivo").build())?
        .child(
            ElementBuilder::new("p")?
                .text("El archivo Excel (.xlsx o .xls, máximo 5MB) debe tener las columnas:")
                .build(),
        )?
        .child(list)?
        .build())
}

fn render_form(vm: &UploadViewModel, upload_state: &UploadState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?.class("upload-form").build();

    let file_input = ElementBuilder::new("input")?
        .class("file-input")
        .id("excel-file")?
        .attr("type", "file")?
        .attr("accept", ".xlsx,.xls")?
        .flag("disabled", upload_state.loading)?
        .build();
    {
        let vm = vm.clone();
        on_change(&file_input, move |e| {
            let file = event_input(&e)
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(ExcelFile::from_browser);
            vm.select_file(file);
        })?;
    }
    let file_group = ElementBuilder::new("div")?
        .class("form-group")
        .child(
            ElementBuilder::new("label")?
                .class("file-label")
                .attr("for", "excel-file")?
                .text("📁 Seleccionar archivo")
                .build(),
        )?
        .child(file_input)?
        .child(
            ElementBuilder::new("span")?
                .class("file-name")
                .text(upload_state.file_label())
                .build(),
        )?
        .build();
    append_child(&form, &file_group)?;

    let limite_input = ElementBuilder::new("input")?
        .class("form-input")
        .id("limite")?
        .attr("type", "number")?
        .attr("min", "1")?
        .attr("value", &upload_state.limite.to_string())?
        .flag("disabled", upload_state.loading)?
        .build();
    {
        let vm = vm.clone();
        on_input(&limite_input, move |e| vm.set_limite_input(&event_value(&e)))?;
    }
    let limite_group = ElementBuilder::new("div")?
        .class("form-group")
        .child(
            ElementBuilder::new("label")?
                .attr("for", "limite")?
                .text("Límite de registros a procesar")
                .build(),
        )?
        .child(limite_input)?
        .build();
    append_child(&form, &limite_group)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", upload_state.loading)?
        .text(if upload_state.loading { "⏳ Procesando..." } else { "📤 Cargar Archivo" })
        .build();
    append_child(&form, &submit_btn)?;

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                vm.submit().await;
            });
        })?;
    }

    Ok(ElementBuilder::new("section")?
        .class("card")
        .child(form)?
        .build())
}

fn render_progress(progress: &UploadProgress) -> Result<Element, JsValue> {
    let fill = ElementBuilder::new("div")?
        .class("progress-fill")
        .attr("style", &format!("width: {}%", progress.percent()))?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("progress-container")
        .child(ElementBuilder::new("div")?.class("progress-bar").child(fill)?.build())?
        .child(
            ElementBuilder::new("p")?
                .class("progress-text")
                .text(&format!("{} ({}%)", progress.label(), progress.percent()))
                .build(),
        )?
        .build())
}

fn render_results(results: &UploadResult) -> Result<Element, JsValue> {
    let summary = ElementBuilder::new("div")?.class("results-summary").build();
    for (valor, etiqueta, class) in [
        (results.total_procesados, "Total procesados", "stat"),
        (results.exitosos, "Exitosos", "stat stat-success"),
        (results.fallidos, "Fallidos", "stat stat-error"),
    ] {
        let stat = ElementBuilder::new("div")?
            .class(class)
            .child(ElementBuilder::new("strong")?.text(&valor.to_string()).build())?
            .child(ElementBuilder::new("span")?.text(etiqueta).build())?
            .build();
        append_child(&summary, &stat)?;
    }

    let section = ElementBuilder::new("section")?
        .class("card upload-results")
        .id(RESULTS_ID)?
        .child(ElementBuilder::new("h3")?.text("📊 Resultados de la carga").build())?
        .child(summary)?
        .build();

    if !results.errores.is_empty() {
        let head_row = ElementBuilder::new("tr")?.build();
        for title in ["Fila", "Cédula", "Error"] {
            append_child(&head_row, &ElementBuilder::new("th")?.text(title).build())?;
        }
        let tbody = ElementBuilder::new("tbody")?.build();
        for error in &results.errores {
            let row = ElementBuilder::new("tr")?
                .child(ElementBuilder::new("td")?.text(&error.fila.to_string()).build())?
                .child(ElementBuilder::new("td")?.text(&error.cedula).build())?
                .child(ElementBuilder::new("td")?.text(&error.error).build())?
                .build();
            append_child(&tbody, &row)?;
        }
        let table = ElementBuilder::new("table")?
            .class("errors-table")
            .child(ElementBuilder::new("thead")?.child(head_row)?.build())?
            .child(tbody)?
            .build();
        append_child(&section, &ElementBuilder::new("h4")?.text("Errores encontrados").build())?;
        append_child(&section, &table)?;
    }

    Ok(section)
}
