//! HTTP Routes

pub mod diagnose;
pub mod rules;
