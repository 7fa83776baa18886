use serde::{Deserialize, Serialize};

const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Fila rechazada durante la carga masiva
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadRowError {
    pub fila: u32,
    pub cedula: String,
    pub error: String,
}

/// Resumen devuelto por el backend tras procesar el Excel
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UploadResult {
    pub exitosos: u32,
    pub fallidos: u32,
    pub total_procesados: u32,
    #[serde(default)]
    pub errores: Vec<UploadRowError>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadResponse {
    #[serde(default)]
    pub mensaje: String,
    pub resultado: UploadResult,
}

/// Contenido del archivo seleccionado
#[derive(Clone, Debug)]
pub enum FileData {
    /// Archivo elegido en un `<input type="file">`
    Browser(web_sys::File),
    /// Bytes ya cargados; solo los construyen los tests nativos
    #[cfg(test)]
    Memory(Vec<u8>),
}

/// Archivo Excel elegido por el usuario
#[derive(Clone, Debug)]
pub struct ExcelFile {
    pub name: String,
    pub size: u64,
    pub data: FileData,
}

impl ExcelFile {
    pub fn from_browser(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size().max(0.0) as u64,
            data: FileData::Browser(file),
        }
    }

    #[cfg(test)]
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            data: FileData::Memory(bytes),
        }
    }

    /// Texto tras el último ".", en minúsculas
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UploadValidationError {
    NoFileSelected,
    InvalidExtension,
    FileTooLarge,
}

impl UploadValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            UploadValidationError::NoFileSelected => "Por favor selecciona un archivo Excel",
            UploadValidationError::InvalidExtension => "El archivo debe ser de tipo Excel (.xlsx o .xls)",
            UploadValidationError::FileTooLarge => "El archivo es demasiado grande. Máximo 5MB",
        }
    }
}

/// Validación previa al envío: archivo presente, extensión Excel y tamaño máximo
pub fn validate_excel_file(
    file: Option<&ExcelFile>,
    max_bytes: u64,
) -> Result<(), UploadValidationError> {
    let file = file.ok_or(UploadValidationError::NoFileSelected)?;
    if !ALLOWED_EXTENSIONS.contains(&file.extension().as_str()) {
        return Err(UploadValidationError::InvalidExtension);
    }
    if file.size > max_bytes {
        return Err(UploadValidationError::FileTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    fn archivo(nombre: &str, size: u64) -> ExcelFile {
        ExcelFile {
            name: nombre.to_string(),
            size,
            data: FileData::Memory(Vec::new()),
        }
    }

    #[test]
    fn missing_file_is_rejected() {
        assert_eq!(
            validate_excel_file(None, 5 * MIB),
            Err(UploadValidationError::NoFileSelected)
        );
    }

    #[test]
    fn csv_is_rejected_by_extension() {
        assert_eq!(
            validate_excel_file(Some(&archivo("data.csv", 10)), 5 * MIB),
            Err(UploadValidationError::InvalidExtension)
        );
        assert_eq!(
            validate_excel_file(Some(&archivo("data.xlsx.csv", 10)), 5 * MIB),
            Err(UploadValidationError::InvalidExtension)
        );
    }

    #[test]
    fn name_without_dot_is_its_own_extension() {
        // Sin "." el nombre completo cuenta como extensión
        assert_eq!(archivo("xlsx", 10).extension(), "xlsx");
        assert_eq!(validate_excel_file(Some(&archivo("xlsx", 10)), 5 * MIB), Ok(()));
        assert_eq!(
            validate_excel_file(Some(&archivo("reporte", 10)), 5 * MIB),
            Err(UploadValidationError::InvalidExtension)
        );
    }

    #[test]
    fn extension_check_ignores_case() {
        assert_eq!(validate_excel_file(Some(&archivo("DATA.XLSX", 10)), 5 * MIB), Ok(()));
        assert_eq!(validate_excel_file(Some(&archivo("viejo.Xls", 10)), 5 * MIB), Ok(()));
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert_eq!(
            validate_excel_file(Some(&archivo("data.xlsx", 6 * MIB)), 5 * MIB),
            Err(UploadValidationError::FileTooLarge)
        );
        assert_eq!(validate_excel_file(Some(&archivo("data.xlsx", 5 * MIB)), 5 * MIB), Ok(()));
        assert_eq!(validate_excel_file(Some(&archivo("data.xlsx", 1024)), 5 * MIB), Ok(()));
    }

    #[test]
    fn from_bytes_uses_buffer_length() {
        let file = ExcelFile::from_bytes("carga.xlsx", vec![0; 2048]);
        assert_eq!(file.size, 2048);
        assert_eq!(file.extension(), "xlsx");
    }

    #[test]
    fn response_without_errores_defaults_to_empty() {
        let resp: UploadResponse = serde_json::from_str(
            r#"{"mensaje":"ok","resultado":{"exitosos":2,"fallidos":0,"total_procesados":2}}"#,
        )
        .unwrap();
        assert!(resp.resultado.errores.is_empty());
        assert_eq!(resp.resultado.total_procesados, 2);
    }
}
