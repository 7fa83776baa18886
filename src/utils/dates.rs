use chrono::{DateTime, NaiveDateTime, Utc};

const SIN_FECHA: &str = "Fecha no disponible";

/// Milisegundos desde epoch (reloj del navegador en wasm)
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Formatea `fecha_creacion` como `dd/mm/aaaa HH:MM`
pub fn format_fecha(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return SIN_FECHA.to_string(),
    };

    if let Ok(fecha) = DateTime::parse_from_rfc3339(raw) {
        return fecha.format("%d/%m/%Y %H:%M").to_string();
    }

    // FastAPI serializa datetimes sin zona horaria
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|patron| NaiveDateTime::parse_from_str(raw, patron).ok())
        .map(|fecha| fecha.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}
