//! Cooling-System Inference Engine
//!
//! Evaluates the rule catalog against a symptom record and assembles a
//! structured diagnostic report. Rendering and input collection live
//! elsewhere.

mod costs;
mod engine;
mod report;

pub use costs::{CostEntry, CostEstimate, CostTable, CostTier, PartCost, TierEstimate, COST_TABLE};
pub use engine::{diagnose, DiagnosticEngine};
pub use report::{DiagnosticReport, ReportedConditions, NEXT_STEP};

pub use rule_catalog::{Component, Finding, RuleId};
pub use symptom_intake::SymptomRecord;
