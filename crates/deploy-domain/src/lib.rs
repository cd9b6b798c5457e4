//! deploy-domain: perfiles de conexión validados (hospital y servidor).
pub mod error;
pub mod hospital;
pub mod server;
pub use error::DomainError;
pub use hospital::HospitalProfile;
pub use server::ServerProfile;
