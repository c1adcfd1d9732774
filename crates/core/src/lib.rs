//! # Verve Core
//!
//! Symptom-to-nutrient matching for the Verve wellness checker.
//!
//! This crate contains the pure lookup logic:
//! - loading the nutrient knowledge table ([`KnowledgeStore`])
//! - the sorted symptom vocabulary presented to users ([`vocabulary`])
//! - substring matching of selected symptoms against records ([`matcher`])
//! - the fixed life-stage tip table ([`LifeStage`])
//!
//! **No presentation concerns**: seeded fact text lives in `verve-flavour`, and HTTP or
//! command-line handling belongs in `api-rest` and `verve-cli`.
//!
//! Matching is a transparent any-overlap test. It performs no diagnosis, scoring or ranking.

pub mod config;
pub mod constants;
pub mod error;
pub mod knowledge;
pub mod life_stage;
pub mod matcher;
pub mod vocabulary;

pub use config::{resolve_knowledge_table_path, CoreConfig};
pub use error::{VerveError, VerveResult};
pub use knowledge::{KnowledgeStore, NutrientRecord};
pub use life_stage::{get_life_stage_tip, LifeStage};

pub use verve_types::{NutrientName, SymptomToken, TextError};
