//! Symptom Intake
//!
//! Provides the symptom record model, safe coercion of raw form codes,
//! form validation and free-text normalization for the diagnosis engine.

mod error;
mod normalizer;
mod record;
mod validator;

pub use error::ValidationError;
pub use normalizer::{sanitize, NormalizedSymptoms, NormalizedText};
pub use record::{
    CoolantAppearance, CoolantColor, DashboardLights, FanBehavior, LeakLocation, SymptomRecord,
    WaterLoss, WhenItOccurs, WhiteSmoke,
};
pub use validator::{SymptomForm, ValidationConfig, ValidationResult, Validator};
