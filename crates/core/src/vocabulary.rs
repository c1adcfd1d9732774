//! Symptom vocabulary: every distinct symptom phrase across the knowledge table.

use crate::NutrientRecord;
use std::collections::BTreeSet;
use verve_types::SymptomToken;

/// Derive the sorted, deduplicated symptom vocabulary from `records`.
///
/// Each record's symptom field is split on commas and trimmed; empty pieces are dropped. The
/// result is in ascending ordinal order (case-sensitive), so identical input always yields an
/// identical listing.
pub fn derive(records: &[NutrientRecord]) -> Vec<SymptomToken> {
    records
        .iter()
        .flat_map(|record| record.symptoms())
        .filter_map(|phrase| SymptomToken::new(phrase).ok())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
