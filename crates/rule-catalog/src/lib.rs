//! Cooling-System Rule Catalog
//!
//! The ordered diagnostic rules, the keyword lists their predicates use and
//! the flags derived once per symptom record.

mod content;
mod evidence;
mod finding;
pub mod keywords;
mod risks;
mod rules;

pub use evidence::{DerivedFlags, Evidence};
pub use finding::{Component, Finding, FindingTemplate, RuleGroup, RuleId};
pub use risks::{applicable_risks, GlobalRisk, RiskId, GLOBAL_RISKS, NEUTRAL_RISK_NOTE};
pub use rules::{suspected_head_gasket, CatalogEntry, Predicate, Rule, CATALOG, FALLBACK};
