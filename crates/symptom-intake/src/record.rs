//! Symptom Record Definitions
//!
//! Closed enumerations for every selector on the diagnosis form. Each one
//! carries an `Unspecified` variant and coerces from raw codes without
//! failing: the canonical snake_case code, a few spelling variants and the
//! legacy Portuguese form codes are recognized, anything else is
//! `Unspecified`.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

macro_rules! symptom_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $code:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
        #[serde(from = "String")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// No answer, or an answer the intake does not recognize
            #[default]
            Unspecified,
        }

        impl $name {
            /// Every variant, `Unspecified` last
            pub const ALL: &'static [$name] = &[$($name::$variant,)+ $name::Unspecified];

            /// Coerce a raw form code; unknown or empty codes are `Unspecified`
            pub fn from_code(code: &str) -> Self {
                match code.trim().to_lowercase().as_str() {
                    $( $code $(| $alias)* => $name::$variant, )+
                    _ => $name::Unspecified,
                }
            }

            /// Canonical snake_case code
            pub fn as_code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Unspecified => "unspecified",
                }
            }

            /// Whether the form actually answered this selector
            pub fn is_specified(&self) -> bool {
                *self != $name::Unspecified
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self::from_code(&code)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self::from_code(code)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_code())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_code())
            }
        }
    };
}

symptom_enum! {
    /// When the problem shows up
    WhenItOccurs {
        /// Parked with the engine idling
        Idle => "idle" | "parado" | "marcha_lenta",
        /// At cruising speed
        Highway => "highway" | "estrada",
        /// Stop-and-go traffic
        Traffic => "traffic" | "transito" | "trânsito",
        /// All the time
        Always => "always" | "sempre",
    }
}

symptom_enum! {
    /// How often coolant has to be topped up
    WaterLoss {
        /// No loss noticed
        None => "none" | "nao" | "não",
        /// About once a week
        Weekly => "weekly" | "sim_1x_semana",
        /// About once a day
        Daily => "daily" | "sim_1x_dia",
        /// Every time the engine warms up
        AfterWarmup => "after_warmup" | "afterwarmup" | "sim_apos_esquentar",
    }
}

symptom_enum! {
    /// Radiator fan behavior
    FanBehavior {
        /// Cycles on and off normally
        NormalCycle => "normal_cycle" | "normalcycle" | "sim_normal",
        /// Never switches on
        NeverEngages => "never_engages" | "neverengages" | "nao" | "não",
        /// Runs nearly all the time
        AlwaysOn => "always_on" | "alwayson" | "sim_tempo_todo",
    }
}

symptom_enum! {
    /// Coolant color in the reservoir
    CoolantColor {
        /// Clean, tinted coolant
        Normal => "normal",
        /// Plain water, no additive
        WaterOnly => "water_only" | "wateronly" | "apenas_agua",
        /// Dark or dirty
        DarkDirty => "dark_dirty" | "darkdirty" | "escuro_sujo",
    }
}

symptom_enum! {
    /// Coolant texture
    CoolantAppearance {
        /// Clear liquid
        Normal => "normal",
        /// Sludge deposits
        Sludge => "sludge" | "borra",
        /// Oily film or emulsion
        Oily => "oily" | "oleoso",
    }
}

symptom_enum! {
    /// Where a leak can be seen
    LeakLocation {
        /// No visible leak
        None => "none" | "nenhum",
        /// Expansion reservoir or its cap
        Reservoir => "reservoir" | "reservatorio" | "reservatório",
        /// Hoses or clamps
        Hoses => "hoses" | "mangueiras",
        /// Main radiator
        Radiator => "radiator" | "radiador",
        /// Wet carpet inside the cabin
        InternalCabin => "internal_cabin" | "internalcabin" | "interno_carpete",
    }
}

symptom_enum! {
    /// White exhaust smoke
    WhiteSmoke {
        /// No smoke
        None => "none" | "nao" | "não",
        /// Only on cold start
        Transient => "transient" | "sim_partida",
        /// Nonstop
        Constant => "constant" | "sim_semparar",
    }
}

symptom_enum! {
    /// Warning lights on the dashboard
    DashboardLights {
        /// No light lit
        None => "none" | "nenhuma",
        /// Temperature light
        Temperature => "temperature" | "temp",
        /// Check-engine / injection light
        Injection => "injection" | "injecao" | "injeção",
        /// Temperature and injection lights
        Both => "both" | "ambas",
    }
}

/// One diagnosis request, as handed over by the input collector
///
/// Free-text fields keep their original case; matching happens on a
/// normalized copy (see [`crate::NormalizedSymptoms`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomRecord {
    /// Model and year, descriptive only
    pub model_year: String,
    /// Engine type, descriptive only
    pub engine_type: String,
    /// What the temperature gauge shows
    pub gauge_temperature: String,
    pub when_it_occurs: WhenItOccurs,
    pub water_loss: WaterLoss,
    pub fan_behavior: FanBehavior,
    pub coolant_color: CoolantColor,
    pub coolant_appearance: CoolantAppearance,
    pub leak_location: LeakLocation,
    pub white_smoke: WhiteSmoke,
    pub dashboard_lights: DashboardLights,
    /// Smells or noises noticed by the owner
    pub smells_noises: String,
    /// Maintenance history
    pub history: String,
    /// Symptoms in the owner's words
    pub symptoms: String,
}
