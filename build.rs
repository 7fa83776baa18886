use std::env;
use std::fs;
use std::path::Path;

/// Claves del .env que se exponen al crate vía `option_env!`
const CLAVES_CONFIG: &[&str] = &[
    "API_BASE_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LIST_ALERT_MS",
    "UPLOAD_ALERT_MS",
    "UPLOAD_DEFAULT_LIMIT",
    "UPLOAD_MAX_BYTES",
    "PROGRESS_HIDE_MS",
];

fn main() {
    for clave in CLAVES_CONFIG {
        println!("cargo:rerun-if-env-changed={}", clave);
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No se encontró .env, usando valores por defecto. Copia .env.example a .env para configurar la API.");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No se pudo leer .env");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !CLAVES_CONFIG.contains(&key) {
            continue;
        }
        // Las variables del entorno tienen prioridad sobre el .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value.trim().trim_matches('"'));
        }
    }
}
