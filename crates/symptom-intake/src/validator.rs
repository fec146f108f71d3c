//! Symptom Form Validator
//!
//! Checks the raw form before the engine ever sees it. Unknown selector
//! codes are not errors here: they become `Unspecified` and the rules treat
//! them as no signal.

use crate::error::ValidationError;
use crate::normalizer::sanitize;
use crate::record::{
    CoolantAppearance, CoolantColor, DashboardLights, FanBehavior, LeakLocation, SymptomRecord,
    WaterLoss, WhenItOccurs, WhiteSmoke,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw diagnosis form as posted by a client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomForm {
    pub model_year: Option<String>,
    pub engine_type: Option<String>,
    pub gauge_temperature: Option<String>,
    pub when_it_occurs: Option<String>,
    pub water_loss: Option<String>,
    pub fan_behavior: Option<String>,
    pub coolant_color: Option<String>,
    pub coolant_appearance: Option<String>,
    pub leak_location: Option<String>,
    pub white_smoke: Option<String>,
    pub dashboard_lights: Option<String>,
    pub smells_noises: Option<String>,
    pub history: Option<String>,
    pub symptoms: Option<String>,
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length of any free-text field (characters)
    pub max_text_len: usize,
    /// Require model/year, engine type and gauge reading
    pub require_vehicle: bool,
    /// Require every selector to be answered
    pub require_selectors: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_text_len: 4000,
            require_vehicle: true,
            require_selectors: true,
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the form can be handed to the engine
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Validator for diagnosis forms
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Check that a field carries a non-blank value
    pub fn validate_required(
        &self,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<(), ValidationError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(()),
            _ => Err(ValidationError::MissingField(field)),
        }
    }

    /// Check a free-text field against the length limit
    pub fn validate_length(
        &self,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<(), ValidationError> {
        let len = value.map(|v| v.trim().chars().count()).unwrap_or(0);
        if len > self.config.max_text_len {
            Err(ValidationError::TooLong {
                field,
                len,
                max: self.config.max_text_len,
            })
        } else {
            Ok(())
        }
    }

    /// Validate a whole form, collecting every error
    pub fn validate(&self, form: &SymptomForm) -> ValidationResult {
        let mut errors = Vec::new();
        let mut fields_checked = 0;

        let vehicle = [
            ("model_year", form.model_year.as_deref()),
            ("engine_type", form.engine_type.as_deref()),
            ("gauge_temperature", form.gauge_temperature.as_deref()),
        ];
        let selectors = [
            ("when_it_occurs", form.when_it_occurs.as_deref()),
            ("water_loss", form.water_loss.as_deref()),
            ("fan_behavior", form.fan_behavior.as_deref()),
            ("coolant_color", form.coolant_color.as_deref()),
            ("coolant_appearance", form.coolant_appearance.as_deref()),
            ("leak_location", form.leak_location.as_deref()),
            ("white_smoke", form.white_smoke.as_deref()),
            ("dashboard_lights", form.dashboard_lights.as_deref()),
        ];
        let narrative = [
            ("smells_noises", form.smells_noises.as_deref()),
            ("history", form.history.as_deref()),
            ("symptoms", form.symptoms.as_deref()),
        ];

        if self.config.require_vehicle {
            for (field, value) in vehicle {
                fields_checked += 1;
                if let Err(e) = self.validate_required(field, value) {
                    errors.push(e);
                }
            }
        }

        if self.config.require_selectors {
            for (field, value) in selectors {
                fields_checked += 1;
                if let Err(e) = self.validate_required(field, value) {
                    errors.push(e);
                }
            }
        }

        for (field, value) in vehicle.into_iter().chain(narrative) {
            fields_checked += 1;
            if let Err(e) = self.validate_length(field, value) {
                errors.push(e);
            }
        }

        if errors.is_empty() {
            ValidationResult::valid(fields_checked)
        } else {
            debug!("Form rejected with {} error(s)", errors.len());
            ValidationResult::invalid(errors, fields_checked)
        }
    }

    /// Validate a form and build the engine's input from it
    pub fn accept(&self, form: SymptomForm) -> Result<SymptomRecord, Vec<ValidationError>> {
        let result = self.validate(&form);
        if !result.valid {
            return Err(result.errors);
        }
        Ok(Self::coerce(form))
    }

    /// Build a record without validating, coercing every field safely
    pub fn coerce(form: SymptomForm) -> SymptomRecord {
        let code = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();

        SymptomRecord {
            model_year: sanitize(form.model_year.as_deref()),
            engine_type: sanitize(form.engine_type.as_deref()),
            gauge_temperature: sanitize(form.gauge_temperature.as_deref()),
            when_it_occurs: WhenItOccurs::from(code(&form.when_it_occurs)),
            water_loss: WaterLoss::from(code(&form.water_loss)),
            fan_behavior: FanBehavior::from(code(&form.fan_behavior)),
            coolant_color: CoolantColor::from(code(&form.coolant_color)),
            coolant_appearance: CoolantAppearance::from(code(&form.coolant_appearance)),
            leak_location: LeakLocation::from(code(&form.leak_location)),
            white_smoke: WhiteSmoke::from(code(&form.white_smoke)),
            dashboard_lights: DashboardLights::from(code(&form.dashboard_lights)),
            smells_noises: sanitize(form.smells_noises.as_deref()),
            history: sanitize(form.history.as_deref()),
            symptoms: sanitize(form.symptoms.as_deref()),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> SymptomForm {
        SymptomForm {
            model_year: Some("Gol 1.6 2012".to_string()),
            engine_type: Some("1.6 flex".to_string()),
            gauge_temperature: Some("Passa do meio".to_string()),
            when_it_occurs: Some("traffic".to_string()),
            water_loss: Some("daily".to_string()),
            fan_behavior: Some("never_engages".to_string()),
            coolant_color: Some("normal".to_string()),
            coolant_appearance: Some("normal".to_string()),
            leak_location: Some("none".to_string()),
            white_smoke: Some("none".to_string()),
            dashboard_lights: Some("temperature".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        let result = Validator::default().validate(&complete_form());
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.fields_checked > 0);
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let form = SymptomForm {
            model_year: Some("   ".to_string()),
            fan_behavior: None,
            ..complete_form()
        };

        let result = Validator::default().validate(&form);
        assert!(!result.valid);
        assert!(result.errors.contains(&ValidationError::MissingField("model_year")));
        assert!(result.errors.contains(&ValidationError::MissingField("fan_behavior")));
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_unknown_selector_code_is_not_an_error() {
        let form = SymptomForm {
            fan_behavior: Some("intermittent".to_string()),
            ..complete_form()
        };

        let record = Validator::default().accept(form).unwrap();
        assert_eq!(record.fan_behavior, FanBehavior::Unspecified);
    }

    #[test]
    fn test_text_too_long() {
        let validator = Validator::new(ValidationConfig {
            max_text_len: 20,
            ..Default::default()
        });
        let form = SymptomForm {
            symptoms: Some("a".repeat(21)),
            ..complete_form()
        };

        let errors = validator.accept(form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "symptoms");
    }

    #[test]
    fn test_vehicle_fields_are_length_checked() {
        let validator = Validator::new(ValidationConfig {
            max_text_len: 12,
            ..Default::default()
        });

        // "Gol 1.6 2012" fits exactly, "Passa do meio" is one over
        let errors = validator.accept(complete_form()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["gauge_temperature"]);
    }

    #[test]
    fn test_relaxed_config_accepts_empty_form() {
        let validator = Validator::new(ValidationConfig {
            require_vehicle: false,
            require_selectors: false,
            ..Default::default()
        });

        let record = validator.accept(SymptomForm::default()).unwrap();
        assert_eq!(record, SymptomRecord::default());
    }

    #[test]
    fn test_accept_trims_and_coerces() {
        let form = SymptomForm {
            symptoms: Some("  Ferve no trânsito  ".to_string()),
            water_loss: Some("sim_1x_dia".to_string()),
            ..complete_form()
        };

        let record = Validator::default().accept(form).unwrap();
        assert_eq!(record.symptoms, "Ferve no trânsito");
        assert_eq!(record.water_loss, WaterLoss::Daily);
        assert_eq!(record.leak_location, LeakLocation::None);
    }
}
