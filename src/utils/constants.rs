/// Claves de localStorage de la sesión
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const TOKEN_TYPE_KEY: &str = "token_type";
pub const USER_KEY: &str = "user";

/// Retraso antes de hacer scroll a los resultados de la carga
pub const SCROLL_TO_RESULTS_MS: u32 = 100;

pub const CONFIRM_DELETE_MESSAGE: &str = "¿Está seguro de que desea eliminar este soporte?";
pub const NO_FILE_LABEL: &str = "No se ha seleccionado ningún archivo";
