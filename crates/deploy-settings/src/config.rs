//! Carga de configuración del almacén de perfiles desde variables de entorno.
//! Usa convención `DEPLOYFLOW_SETTINGS_DIR` con un valor por defecto local.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct SettingsConfig {
    pub dir: PathBuf,
}

impl SettingsConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let dir = env::var("DEPLOYFLOW_SETTINGS_DIR").map(PathBuf::from)
                                                     .unwrap_or_else(|_| PathBuf::from("settings"));
        Self { dir }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
