//! Repositorio de perfiles sobre dos colecciones JSON en disco.

use std::fs;
use std::path::{Path, PathBuf};

use deploy_domain::{HospitalProfile, ServerProfile};
use tracing::info;
use uuid::Uuid;

use crate::config::SettingsConfig;
use crate::errors::SettingsError;

/// Colección de perfiles de hospital.
pub const HOSPITAL_SETTINGS_FILE: &str = "hospitals.json";
/// Colección de perfiles de servidor.
pub const SERVER_SETTINGS_FILE: &str = "servers.json";

/// Estado de proceso con ciclo de vida explícito: se abre una vez, se
/// consulta por referencia y se relee sólo a petición.
#[derive(Debug)]
pub struct ProfileStore {
    dir: PathBuf,
    hospitals: Vec<HospitalProfile>,
    servers: Vec<ServerProfile>,
}

impl ProfileStore {
    pub fn open(config: &SettingsConfig) -> Result<Self, SettingsError> {
        let mut store = Self { dir: config.dir.clone(),
                               hospitals: Vec::new(),
                               servers: Vec::new() };
        store.reload()?;
        Ok(store)
    }

    /// Relee ambas colecciones desde disco. Un archivo ausente equivale a
    /// una colección vacía (primer arranque).
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        self.hospitals = read_collection(&self.dir.join(HOSPITAL_SETTINGS_FILE))?;
        self.servers = read_collection(&self.dir.join(SERVER_SETTINGS_FILE))?;
        info!(hospitals = self.hospitals.len(), servers = self.servers.len(), "profile store loaded");
        Ok(())
    }

    pub fn hospitals(&self) -> &[HospitalProfile] {
        &self.hospitals
    }

    pub fn servers(&self) -> &[ServerProfile] {
        &self.servers
    }

    pub fn find_hospital(&self, id: &str) -> Option<&HospitalProfile> {
        self.hospitals.iter().find(|h| h.id == id)
    }

    pub fn find_server(&self, id: &str) -> Option<&ServerProfile> {
        self.servers.iter().find(|s| s.id == id)
    }

    /// Servidores asociados a un hospital: lo que la vista ofrece una vez
    /// elegido el hospital.
    pub fn servers_for_hospital(&self, hospital_id: &str) -> Vec<&ServerProfile> {
        self.servers.iter().filter(|s| s.hospital_id == hospital_id).collect()
    }

    /// Alta o modificación de un hospital; valida y persiste. Un id vacío
    /// recibe uno recién generado.
    pub fn save_hospital(&mut self, mut hospital: HospitalProfile) -> Result<HospitalProfile, SettingsError> {
        hospital.validate()?;
        if hospital.id.is_empty() {
            hospital.id = Uuid::new_v4().to_string();
        }
        match self.hospitals.iter_mut().find(|h| h.id == hospital.id) {
            Some(existing) => *existing = hospital.clone(),
            None => self.hospitals.push(hospital.clone()),
        }
        write_collection(&self.dir.join(HOSPITAL_SETTINGS_FILE), &self.hospitals)?;
        Ok(hospital)
    }

    pub fn save_server(&mut self, mut server: ServerProfile) -> Result<ServerProfile, SettingsError> {
        server.validate()?;
        if server.id.is_empty() {
            server.id = Uuid::new_v4().to_string();
        }
        match self.servers.iter_mut().find(|s| s.id == server.id) {
            Some(existing) => *existing = server.clone(),
            None => self.servers.push(server.clone()),
        }
        write_collection(&self.dir.join(SERVER_SETTINGS_FILE), &self.servers)?;
        Ok(server)
    }

    pub fn delete_hospital(&mut self, id: &str) -> Result<(), SettingsError> {
        let before = self.hospitals.len();
        self.hospitals.retain(|h| h.id != id);
        if self.hospitals.len() == before {
            return Err(SettingsError::NotFound(id.to_string()));
        }
        write_collection(&self.dir.join(HOSPITAL_SETTINGS_FILE), &self.hospitals)?;
        Ok(())
    }

    pub fn delete_server(&mut self, id: &str) -> Result<(), SettingsError> {
        let before = self.servers.len();
        self.servers.retain(|s| s.id != id);
        if self.servers.len() == before {
            return Err(SettingsError::NotFound(id.to_string()));
        }
        write_collection(&self.dir.join(SERVER_SETTINGS_FILE), &self.servers)?;
        Ok(())
    }
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, SettingsError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_collection<T: serde::Serialize>(path: &Path, items: &[T]) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(items)?)?;
    Ok(())
}
