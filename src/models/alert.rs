/// Severidad de una alerta
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
        }
    }

    /// Clase CSS usada por las vistas (`alert alert-success`, ...)
    pub fn css_class(&self) -> String {
        format!("alert alert-{}", self.as_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct AlertId(pub u64);

/// Alerta transitoria mostrada por una vista
#[derive(Clone, PartialEq, Debug)]
pub struct Alert {
    pub id: AlertId,
    pub message: String,
    pub kind: AlertKind,
    /// Instante (ms desde epoch) en que debe desaparecer
    pub expires_at_ms: i64,
}
