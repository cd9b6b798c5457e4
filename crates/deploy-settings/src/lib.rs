//! deploy-settings: repositorio explícito de perfiles de conexión.
//!
//! Los perfiles de hospital y servidor se cargan una sola vez en un
//! `ProfileStore` que se pasa por referencia a quien lo necesite; los
//! cambios externos se recogen con `reload` explícito, sin relecturas
//! ambientales.
pub mod config;
pub mod errors;
pub mod store;

pub use config::{init_dotenv, SettingsConfig};
pub use errors::SettingsError;
pub use store::{ProfileStore, HOSPITAL_SETTINGS_FILE, SERVER_SETTINGS_FILE};
