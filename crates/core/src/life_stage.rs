//! Life-stage wellness tips.
//!
//! A fixed table mapping each [`LifeStage`] to one guidance string. The table is constant data;
//! there is no way to add or change a tip at runtime.

use crate::{VerveError, VerveResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Life stages a tip can be requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    Adolescence,
    #[serde(rename = "Reproductive Age")]
    ReproductiveAge,
    Pregnancy,
    Postpartum,
    Menopause,
    #[serde(rename = "Post-menopause")]
    PostMenopause,
}

impl LifeStage {
    /// Every life stage, in the order they are presented.
    pub const ALL: [LifeStage; 6] = [
        LifeStage::Adolescence,
        LifeStage::ReproductiveAge,
        LifeStage::Pregnancy,
        LifeStage::Postpartum,
        LifeStage::Menopause,
        LifeStage::PostMenopause,
    ];

    /// Display name, which is also the accepted input spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            LifeStage::Adolescence => "Adolescence",
            LifeStage::ReproductiveAge => "Reproductive Age",
            LifeStage::Pregnancy => "Pregnancy",
            LifeStage::Postpartum => "Postpartum",
            LifeStage::Menopause => "Menopause",
            LifeStage::PostMenopause => "Post-menopause",
        }
    }

    /// The wellness tip for this stage.
    pub fn tip(self) -> &'static str {
        match self {
            LifeStage::Adolescence => {
                "Focus on calcium and vitamin D for strong bones, and iron for healthy blood."
            }
            LifeStage::ReproductiveAge => {
                "Ensure adequate folate intake, especially if planning for pregnancy."
            }
            LifeStage::Pregnancy => {
                "Folic acid, iron, and omega-3s are crucial for your baby's development."
            }
            LifeStage::Postpartum => {
                "Continue with prenatal vitamins and focus on iron-rich foods to replenish your body."
            }
            LifeStage::Menopause => {
                "Calcium and vitamin D are important for bone health as estrogen levels decrease."
            }
            LifeStage::PostMenopause => {
                "Maintain heart health with omega-3s and antioxidant-rich foods."
            }
        }
    }
}

impl std::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifeStage {
    type Err = VerveError;

    /// Parse an exact display name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifeStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| VerveError::UnknownLifeStage(s.to_owned()))
    }
}

/// Look up the tip for a life stage given by name.
///
/// # Errors
///
/// Returns `VerveError::UnknownLifeStage` if `stage` is not one of the six display names.
pub fn get_life_stage_tip(stage: &str) -> VerveResult<&'static str> {
    Ok(stage.parse::<LifeStage>()?.tip())
}
