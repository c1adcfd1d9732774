//! Validated text types shared across the Verve crates.

/// Errors that can occur when creating validated text types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

fn trimmed_non_empty(input: &str) -> Result<String, TextError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TextError::Empty);
    }
    Ok(trimmed.to_owned())
}

/// A single symptom phrase, such as `"bone pain"`.
///
/// Tokens are trimmed of surrounding whitespace on construction but otherwise keep their exact
/// characters, including case. Two tokens are equal only when their text is byte-for-byte equal,
/// and they order ordinally, which is the order the symptom vocabulary is presented in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymptomToken(String);

impl SymptomToken {
    /// Creates a new `SymptomToken` from one comma-separated piece of a symptom field.
    ///
    /// # Errors
    ///
    /// Returns `Err(TextError::Empty)` if the trimmed piece is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        trimmed_non_empty(input.as_ref()).map(Self)
    }

    /// Returns the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymptomToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SymptomToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for SymptomToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SymptomToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SymptomToken::new(&s).map_err(serde::de::Error::custom)
    }
}

/// The name of a nutrient, which is the unique key of a knowledge table row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NutrientName(String);

impl NutrientName {
    /// Creates a new `NutrientName`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `Err(TextError::Empty)` if nothing is left after trimming.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        trimmed_non_empty(input.as_ref()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NutrientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NutrientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NutrientName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symptom_token_trims_but_preserves_case() {
        let token = SymptomToken::new("  Bone Pain ").expect("valid token");
        assert_eq!(token.as_str(), "Bone Pain");
        assert_ne!(token, SymptomToken::new("bone pain").unwrap());
    }

    #[test]
    fn symptom_token_rejects_blank_input() {
        assert_eq!(SymptomToken::new(""), Err(TextError::Empty));
        assert_eq!(SymptomToken::new("   \t"), Err(TextError::Empty));
    }

    #[test]
    fn symptom_tokens_order_ordinally() {
        let mut tokens = vec![
            SymptomToken::new("fatigue").unwrap(),
            SymptomToken::new("Fatigue").unwrap(),
            SymptomToken::new("bone pain").unwrap(),
        ];
        tokens.sort();
        let texts: Vec<&str> = tokens.iter().map(SymptomToken::as_str).collect();
        assert_eq!(texts, vec!["Fatigue", "bone pain", "fatigue"]);
    }

    #[test]
    fn symptom_token_deserialise_rejects_blank() {
        let err = serde_json::from_str::<SymptomToken>("\"  \"").expect_err("blank token");
        assert!(err.to_string().contains("Text cannot be empty"));

        let token: SymptomToken = serde_json::from_str("\" hair loss\"").expect("valid token");
        assert_eq!(token.as_str(), "hair loss");
    }

    #[test]
    fn nutrient_name_trims_and_rejects_blank() {
        assert_eq!(NutrientName::new(" Iron ").unwrap().as_str(), "Iron");
        assert_eq!(NutrientName::new(" "), Err(TextError::Empty));
        assert_eq!(
            serde_json::to_string(&NutrientName::new("Zinc").unwrap()).unwrap(),
            "\"Zinc\""
        );
    }
}
