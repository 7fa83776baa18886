// ============================================================================
// DOWNLOAD - Descarga de archivos exportados en el navegador
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom::{append_child, create_element, document};
use crate::models::Download;

/// Envuelve bytes en un `Blob` con el MIME indicado
pub fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// Dispara la descarga con un `<a download>` temporal
pub fn trigger_download(download: &Download) -> Result<(), JsValue> {
    let blob = bytes_to_blob(&download.bytes, &download.mime_type)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&download.filename);

    let body = document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No document body"))?;
    append_child(&body, &anchor)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url)?;

    log::info!("💾 [DOWNLOAD] {} ({} bytes)", download.filename, download.bytes.len());
    Ok(())
}
