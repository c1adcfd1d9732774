//! Deficiency matching.
//!
//! A record matches when any selected symptom occurs *anywhere* in its raw symptom text. This is
//! substring containment, not token equality: `"hair"` matches `"hair loss"`, and `"pain"`
//! matches both `"bone pain"` and `"joint pain"`. Short selections can therefore match unrelated
//! phrases. Results keep knowledge table order and carry no score or rank.

use crate::{NutrientRecord, VerveError, VerveResult};

/// Return the records whose raw symptom field contains any token in `selected`.
///
/// Comparison is case-sensitive. Empty strings in `selected` are ignored, since the empty string
/// occurs in every field. Tokens are not trimmed, so whitespace is matched literally: `" "` is
/// kept and hits every multi-word field.
///
/// # Errors
///
/// Returns `VerveError::InsufficientInput` if `selected` has no non-empty token. A non-empty
/// selection that matches nothing returns an empty `Vec`.
pub fn match_records<'a, S: AsRef<str>>(
    records: &'a [NutrientRecord],
    selected: &[S],
) -> VerveResult<Vec<&'a NutrientRecord>> {
    let selected: Vec<&str> = selected
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| !token.is_empty())
        .collect();

    if selected.is_empty() {
        return Err(VerveError::InsufficientInput);
    }

    let matches: Vec<&NutrientRecord> = records
        .iter()
        .filter(|record| {
            selected
                .iter()
                .any(|token| record.raw_symptoms().contains(token))
        })
        .collect();

    tracing::debug!(
        "{} of {} records matched {} selected symptoms",
        matches.len(),
        records.len(),
        selected.len()
    );

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verve_types::NutrientName;

    fn record(nutrient: &str, symptoms: &str, remedy: &str) -> NutrientRecord {
        NutrientRecord::new(NutrientName::new(nutrient).unwrap(), symptoms, remedy)
    }

    fn names(records: &[&NutrientRecord]) -> Vec<String> {
        records.iter().map(|r| r.nutrient().to_string()).collect()
    }

    fn sample() -> Vec<NutrientRecord> {
        vec![
            record("Vitamin D", "fatigue, bone pain", "sunlight exposure"),
            record("Iron", "fatigue, pale skin, hair loss", "red meat"),
            record("Omega-3", "dry skin, joint pain", "oily fish"),
            record("Vitamin C", "Bleeding gums", "citrus fruits"),
        ]
    }

    #[test]
    fn single_record_matches_selected_symptom() {
        let records = vec![record("Vitamin D", "fatigue, bone pain", "sunlight exposure")];
        let matches = match_records(&records, &["fatigue"]).expect("match should succeed");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0], &records[0]);
    }

    #[test]
    fn unmatched_selection_is_empty_not_error() {
        let records = vec![record("Vitamin D", "fatigue, bone pain", "sunlight exposure")];
        let matches = match_records(&records, &["headache"]).expect("match should succeed");
        assert!(matches.is_empty());
    }

    #[test]
    fn empty_selection_is_insufficient_input() {
        let records = sample();
        let none: [&str; 0] = [];
        assert!(matches!(
            match_records(&records, &none),
            Err(VerveError::InsufficientInput)
        ));
    }

    #[test]
    fn selection_of_only_empty_strings_is_insufficient_input() {
        let records = sample();
        assert!(matches!(
            match_records(&records, &["", ""]),
            Err(VerveError::InsufficientInput)
        ));
    }

    #[test]
    fn matches_by_substring_containment() {
        let records = vec![record("Zinc", "hair loss", "shellfish")];
        let matches = match_records(&records, &["hair"]).expect("match should succeed");
        assert_eq!(names(&matches), vec!["Zinc"]);
    }

    #[test]
    fn short_token_matches_unrelated_phrases() {
        let records = sample();
        let matches = match_records(&records, &["pain"]).expect("match should succeed");
        assert_eq!(names(&matches), vec!["Vitamin D", "Omega-3"]);

        let matches = match_records(&records, &["in"]).expect("match should succeed");
        assert_eq!(names(&matches), vec!["Vitamin D", "Iron", "Omega-3", "Vitamin C"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let records = sample();
        assert!(match_records(&records, &["bleeding gums"])
            .expect("match should succeed")
            .is_empty());
        assert_eq!(
            names(&match_records(&records, &["Bleeding gums"]).unwrap()),
            vec!["Vitamin C"]
        );
    }

    #[test]
    fn preserves_table_order_regardless_of_selection_order() {
        let records = sample();
        let matches =
            match_records(&records, &["dry skin", "fatigue"]).expect("match should succeed");
        assert_eq!(names(&matches), vec!["Vitamin D", "Iron", "Omega-3"]);
    }

    #[test]
    fn each_record_appears_once() {
        let records = sample();
        let matches =
            match_records(&records, &["fatigue", "pale skin", "hair loss"]).expect("match");
        assert_eq!(names(&matches), vec!["Vitamin D", "Iron"]);
    }

    #[test]
    fn result_is_exactly_the_containing_records() {
        let records = sample();
        let selections: [&[&str]; 4] = [&["skin"], &["fatigue", "gums"], &["loss"], &["x", "joint"]];

        for selected in selections {
            let matches = match_records(&records, selected).expect("match should succeed");
            for record in &records {
                let contains = selected.iter().any(|t| record.raw_symptoms().contains(t));
                let included = matches.iter().any(|m| *m == record);
                assert_eq!(contains, included, "{selected:?} vs {}", record.nutrient());
            }
        }
    }

    #[test]
    fn empty_strings_in_selection_are_ignored() {
        let records = sample();
        let matches = match_records(&records, &["", "joint pain"]).expect("match");
        assert_eq!(names(&matches), vec!["Omega-3"]);
    }

    #[test]
    fn whitespace_token_is_matched_literally() {
        let mut records = sample();
        records.push(record("Iodine", "goitre", "iodised salt"));

        let matches = match_records(&records, &[" "]).expect("match should succeed");
        assert_eq!(names(&matches), vec!["Vitamin D", "Iron", "Omega-3", "Vitamin C"]);

        let matches = match_records(&records, &[" fatigue"]).expect("match should succeed");
        assert_eq!(names(&matches), Vec::<String>::new());
    }
}
