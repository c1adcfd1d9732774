//! Request and response bodies.
//!
//! Field names are part of the public JSON contract.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use verve_core::{LifeStage, NutrientRecord, SymptomToken};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Every distinct symptom, sorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListSymptomsRes {
    pub symptoms: Vec<String>,
}

impl ListSymptomsRes {
    pub fn from_tokens(tokens: &[SymptomToken]) -> Self {
        Self {
            symptoms: tokens.iter().map(|t| t.as_str().to_owned()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FindMatchesReq {
    /// Selected symptoms; each is matched as a substring of a nutrient's symptom text.
    #[serde(default)]
    pub selected: Vec<String>,
}

/// A nutrient whose symptoms matched the selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutrientMatch {
    pub nutrient: String,
    /// The nutrient's symptom text exactly as listed in the knowledge table.
    pub symptoms: String,
    pub remedy: String,
}

impl From<&NutrientRecord> for NutrientMatch {
    fn from(record: &NutrientRecord) -> Self {
        Self {
            nutrient: record.nutrient().to_string(),
            symptoms: record.raw_symptoms().to_owned(),
            remedy: record.remedy().to_owned(),
        }
    }
}

/// Matching nutrients in knowledge table order. Empty when nothing matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FindMatchesRes {
    pub matches: Vec<NutrientMatch>,
}

impl FindMatchesRes {
    pub fn from_records(records: &[&NutrientRecord]) -> Self {
        Self {
            matches: records.iter().map(|r| NutrientMatch::from(*r)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListLifeStagesRes {
    #[schema(value_type = Vec<String>)]
    pub life_stages: Vec<LifeStage>,
}

impl ListLifeStagesRes {
    pub fn all() -> Self {
        Self {
            life_stages: LifeStage::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LifeStageTipRes {
    /// Serialised by display name, e.g. `"Reproductive Age"`.
    #[schema(value_type = String)]
    pub life_stage: LifeStage,
    pub tip: String,
}

impl From<LifeStage> for LifeStageTipRes {
    fn from(stage: LifeStage) -> Self {
        Self {
            life_stage: stage,
            tip: stage.tip().to_owned(),
        }
    }
}
