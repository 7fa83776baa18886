use serde::{Deserialize, Serialize};

pub const MIN_NOMBRE: usize = 3;
pub const MIN_CEDULA: usize = 5;
pub const MIN_DIRECCION: usize = 5;

/// Registro de soporte tal como lo devuelve el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Soporte {
    /// Asignado por el servidor
    #[serde(default)]
    pub id: Option<i64>,
    pub nombre: String,
    pub cedula: String,
    pub direccion: String,
    /// Asignado por el servidor (ISO-8601)
    #[serde(default)]
    pub fecha_creacion: Option<String>,
}

/// Cuerpo del POST /soportes/ (nunca lleva id ni fecha)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct NewSoporte {
    pub nombre: String,
    pub cedula: String,
    pub direccion: String,
}

/// Campo editable del formulario de creación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SoporteField {
    Nombre,
    Cedula,
    Direccion,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SoporteValidationError {
    MissingFields,
    NombreTooShort,
    CedulaTooShort,
    DireccionTooShort,
}

impl SoporteValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            SoporteValidationError::MissingFields => "Por favor, complete todos los campos",
            SoporteValidationError::NombreTooShort => "El nombre debe tener al menos 3 caracteres",
            SoporteValidationError::CedulaTooShort => "La cédula debe tener al menos 5 caracteres",
            SoporteValidationError::DireccionTooShort => "La dirección debe tener al menos 5 caracteres",
        }
    }
}

impl NewSoporte {
    pub fn set(&mut self, field: SoporteField, value: String) {
        match field {
            SoporteField::Nombre => self.nombre = value,
            SoporteField::Cedula => self.cedula = value,
            SoporteField::Direccion => self.direccion = value,
        }
    }

    pub fn get(&self, field: SoporteField) -> &str {
        match field {
            SoporteField::Nombre => &self.nombre,
            SoporteField::Cedula => &self.cedula,
            SoporteField::Direccion => &self.direccion,
        }
    }

    /// Copia con los espacios sobrantes eliminados
    pub fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            cedula: self.cedula.trim().to_string(),
            direccion: self.direccion.trim().to_string(),
        }
    }

    /// Valida longitudes mínimas (en caracteres, no bytes)
    pub fn validate(&self) -> Result<(), SoporteValidationError> {
        let datos = self.trimmed();
        if datos.nombre.is_empty() || datos.cedula.is_empty() || datos.direccion.is_empty() {
            return Err(SoporteValidationError::MissingFields);
        }
        if datos.nombre.chars().count() < MIN_NOMBRE {
            return Err(SoporteValidationError::NombreTooShort);
        }
        if datos.cedula.chars().count() < MIN_CEDULA {
            return Err(SoporteValidationError::CedulaTooShort);
        }
        if datos.direccion.chars().count() < MIN_DIRECCION {
            return Err(SoporteValidationError::DireccionTooShort);
        }
        Ok(())
    }
}

/// Respuesta del DELETE /soportes/{id}
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Formatos de exportación disponibles
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn path(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "soportes/export/excel",
            ExportFormat::Pdf => "soportes/export/pdf",
        }
    }

    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "soportes.xlsx",
            ExportFormat::Pdf => "soportes.pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Error al exportar a Excel",
            ExportFormat::Pdf => "Error al exportar a PDF",
        }
    }
}

/// Archivo exportado listo para descargar en el navegador
#[derive(Clone, PartialEq, Debug)]
pub struct Download {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            filename: format.filename().to_string(),
            mime_type: format.mime_type().to_string(),
            bytes,
        }
    }
}
