//! Presentation text for Verve front ends.
//!
//! None of this affects matching. Anything that looks random is picked from a fixed list with a
//! caller-supplied seed, so the same seed and inputs always produce the same text.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shown at the end of every report.
pub const DISCLAIMER: &str = "Disclaimer: verve is for educational purposes only. Always consult with a healthcare professional for medical advice.";

/// Shown when a non-empty selection matches no nutrient.
pub const NO_DEFICIENCY_MESSAGE: &str = "Wonderful news! We didn't detect any clear signs of vitamin deficiencies. Keep nurturing your body with balanced nutrition!";

/// Shown when a check is requested without any selected symptom.
pub const EMPTY_SELECTION_MESSAGE: &str = "Oops! We need some information to provide insights. Please select at least one symptom.";

const DEFAULT_EMOJI: &str = "💊";

static SELF_CARE_REMINDERS: [&str; 5] = [
    "Take a moment for yourself today. You deserve it!",
    "Nourish your body, mind, and soul. They're all connected.",
    "Remember, your health is an investment, not an expense.",
    "Stay hydrated! Water is essential for every cell in your body.",
    "Prioritize sleep. It's your body's time to heal and rejuvenate.",
];

/// One kind of nutrient fact: a sentence with a nutrient slot and a topic slot.
struct FactTemplate {
    prefix: &'static str,
    middle: &'static str,
    suffix: &'static str,
    topics: &'static [&'static str],
}

static FACT_TEMPLATES: [FactTemplate; 3] = [
    FactTemplate {
        prefix: "Women's Wellness: ",
        middle: " is essential for ",
        suffix: "!",
        topics: &[
            "hormonal balance",
            "bone density",
            "reproductive health",
            "energy levels",
        ],
    },
    FactTemplate {
        prefix: "Did you know? Women often need more ",
        middle: " during ",
        suffix: ".",
        topics: &["pregnancy", "menstruation", "menopause"],
    },
    FactTemplate {
        prefix: "Empowering Fact: Adequate ",
        middle: " intake can help with ",
        suffix: "!",
        topics: &[
            "PMS symptoms",
            "fertility",
            "postpartum recovery",
            "menopausal comfort",
        ],
    },
];

/// Emoji shown next to a nutrient name, with a generic pill for nutrients not listed.
pub fn emoji_for_nutrient(nutrient: &str) -> &'static str {
    match nutrient {
        "Vitamin D" => "☀️",
        "Vitamin B12" => "🥩",
        "Iron" => "💪",
        "Vitamin C" => "🍊",
        "Vitamin A" => "🥕",
        "Magnesium" => "🥜",
        "Vitamin B6" => "🍌",
        "Folate" => "🥬",
        "Vitamin E" => "🥑",
        "Zinc" => "🦪",
        "Calcium" => "🥛",
        "Omega-3" => "🐟",
        _ => DEFAULT_EMOJI,
    }
}

/// A women's health fact about `nutrient`, chosen by `seed`.
pub fn nutrient_fact(nutrient: &str, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    // Both lists are non-empty constants.
    let template = FACT_TEMPLATES
        .choose(&mut rng)
        .unwrap_or(&FACT_TEMPLATES[0]);
    let topic = template.topics.choose(&mut rng).copied().unwrap_or_default();

    format!(
        "{}{}{}{}{}",
        template.prefix, nutrient, template.middle, topic, template.suffix
    )
}

/// A daily self-care reminder chosen by `seed`.
pub fn self_care_reminder(seed: u64) -> &'static str {
    let mut rng = StdRng::seed_from_u64(seed);
    SELF_CARE_REMINDERS
        .choose(&mut rng)
        .copied()
        .unwrap_or(SELF_CARE_REMINDERS[0])
}

/// Greeting shown once a user has given their name.
pub fn welcome(name: &str) -> String {
    format!("Welcome to verve, {name}! Let's explore your nutritional wellness together.")
}
