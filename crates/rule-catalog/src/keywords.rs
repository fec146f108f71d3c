//! Keyword Term Lists
//!
//! Each list feeds exactly one predicate. Terms are matched as
//! case-insensitive substrings of the normalized text, so stems such as
//! "superaquec" cover several inflections. Portuguese terms come from the
//! original form's users; English equivalents sit next to them.

/// Gauge text that means the needle is high. The bare numbers are degrees
/// Celsius matched as substrings, so "1000" also hits "100". English "red"
/// only appears inside phrases, since the bare word hits "centered".
pub const GAUGE_HIGH: &[&str] = &[
    "vermelho",
    "acima",
    "100",
    "110",
    "120",
    "in the red",
    "into the red",
    "to the red",
    "red zone",
    "goes red",
    "above",
];

/// Boiling or overheating described in the narrative
pub const BOILING: &[&str] = &["ferve", "fervendo", "superaquece", "superaquec", "boil", "overheat"];

/// Reservoir or cap not holding pressure
pub const RESERVOIR_CAP: &[&str] = &[
    "tampa",
    "reservatório borbulha",
    "joga água fora",
    "radiator cap",
    "reservoir cap",
    "reservoir bubbl",
    "spits coolant",
];

/// Damaged hoses or clamps
pub const HOSE_DAMAGE: &[&str] = &[
    "mangueira rasgada",
    "mangueira furada",
    "abraçadeira",
    "split hose",
    "cracked hose",
    "hose clamp",
    "loose clamp",
];

/// Clogged or dirty radiator
pub const RADIATOR_CLOGGED: &[&str] = &[
    "radiador entupido",
    "radiador sujo",
    "clogged radiator",
    "dirty radiator",
];

/// Fan that never switches on
pub const FAN_NEVER_ENGAGES: &[&str] = &[
    "ventoinha não arma",
    "ventoinha nao arma",
    "fan never",
    "fan doesn't turn on",
    "fan does not turn on",
];

/// Engine slow to reach working temperature
pub const SLOW_WARMUP: &[&str] = &[
    "demora a esquentar",
    "só esquenta no trânsito",
    "slow to warm",
    "takes long to warm",
];

/// No heat at all, including the cabin heater
pub const NO_HEAT: &[&str] = &[
    "não esquenta",
    "sem aquecimento interno",
    "never warms up",
    "no cabin heat",
];

/// Needle climbing past the middle
pub const OVERHEATING: &[&str] = &[
    "superaquece",
    "ferve",
    "passa do meio",
    "vai pro vermelho",
    "overheat",
    "past the middle",
    "goes into the red",
];

/// Gauge moving erratically
pub const ERRATIC_GAUGE: &[&str] = &[
    "marcador louco",
    "marcador doido",
    "erratic gauge",
    "gauge jumps",
];

/// Belt-area or pump noises
pub const PUMP_NOISE: &[&str] = &[
    "barulho na correia",
    "chiado",
    "ronco na bomba",
    "belt noise",
    "whine",
    "pump noise",
];

/// Coolant not circulating
pub const NO_CIRCULATION: &[&str] = &[
    "não circula",
    "mangueira gelada",
    "sem circulação",
    "sem retorno no reservatório",
    "not circulating",
    "cold upper hose",
    "no circulation",
];

/// Gurgling or bubbling air pockets
pub const TRAPPED_AIR: &[&str] = &["borbulha", "borbulhamento", "gorgolejo", "gurgl", "bubbling"];

/// Oil and coolant mixing
pub const OIL_CONTAMINATION: &[&str] = &[
    "mistura óleo e água",
    "óleo no reservatório",
    "maionese na tampa",
    "oil in coolant",
    "oil in the reservoir",
    "mayonnaise",
    "milky oil",
];

/// Every list, for auditing
pub const ALL: &[(&str, &[&str])] = &[
    ("gauge_high", GAUGE_HIGH),
    ("boiling", BOILING),
    ("reservoir_cap", RESERVOIR_CAP),
    ("hose_damage", HOSE_DAMAGE),
    ("radiator_clogged", RADIATOR_CLOGGED),
    ("fan_never_engages", FAN_NEVER_ENGAGES),
    ("slow_warmup", SLOW_WARMUP),
    ("no_heat", NO_HEAT),
    ("overheating", OVERHEATING),
    ("erratic_gauge", ERRATIC_GAUGE),
    ("pump_noise", PUMP_NOISE),
    ("no_circulation", NO_CIRCULATION),
    ("trapped_air", TRAPPED_AIR),
    ("oil_contamination", OIL_CONTAMINATION),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_are_folded_and_trimmed() {
        for (name, terms) in ALL {
            assert!(!terms.is_empty(), "{name} is empty");
            for term in *terms {
                assert!(!term.is_empty(), "{name} has an empty term");
                assert_eq!(*term, term.trim(), "{name}: {term:?} not trimmed");
                assert_eq!(*term, term.to_lowercase(), "{name}: {term:?} not lower-case");
            }
        }
    }
}
