//! Rapport - Affective Social Agent Core
//!
//! Perceived social acts are appraised into emotion and relationship
//! changes, remembered, periodically reflected upon, and answered in an
//! interaction style learned online and bounded by hard safety rules.

pub mod adaptation;
pub mod agent;
pub mod bridge;
pub mod core;
pub mod decision;
pub mod emotion;
pub mod memory;
pub mod motivation;
pub mod perception;
pub mod relationship;
