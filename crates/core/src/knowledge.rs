//! Knowledge table loading.
//!
//! The knowledge table is a CSV file with a header row naming at least the `Vitamin`,
//! `Symptoms` and `Solutions` columns. Column order is free and extra columns are ignored.
//! Symptom fields hold comma-separated phrases, so they are quoted in the file:
//!
//! ```text
//! Vitamin,Symptoms,Solutions
//! Vitamin D,"fatigue, bone pain",sunlight exposure
//! ```
//!
//! Rows become [`NutrientRecord`]s which are immutable once loaded. [`KnowledgeStore`] owns the
//! records for the life of the process and answers vocabulary and matching queries over them.

use crate::config::CoreConfig;
use crate::constants::{REQUIRED_COLUMNS, SYMPTOM_DELIMITER};
use crate::{matcher, vocabulary, VerveError, VerveResult};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use verve_types::{NutrientName, SymptomToken};

/// One row of the knowledge table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NutrientRecord {
    nutrient: NutrientName,
    raw_symptoms: String,
    symptoms: Vec<String>,
    remedy: String,
}

impl NutrientRecord {
    /// Build a record from the three table fields.
    ///
    /// `raw_symptoms` is kept exactly as given for matching. The split phrases are trimmed and
    /// keep empty pieces, so `"fatigue,,bone pain"` yields three phrases, the middle one empty.
    pub fn new(
        nutrient: NutrientName,
        raw_symptoms: impl Into<String>,
        remedy: impl Into<String>,
    ) -> Self {
        let raw_symptoms = raw_symptoms.into();
        let symptoms = raw_symptoms
            .split(SYMPTOM_DELIMITER)
            .map(|phrase| phrase.trim().to_owned())
            .collect();

        Self {
            nutrient,
            raw_symptoms,
            symptoms,
            remedy: remedy.into(),
        }
    }

    pub fn nutrient(&self) -> &NutrientName {
        &self.nutrient
    }

    /// The unsplit symptom field as it appeared in the table.
    pub fn raw_symptoms(&self) -> &str {
        &self.raw_symptoms
    }

    /// Trimmed symptom phrases in table order, including empty phrases.
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn remedy(&self) -> &str {
        &self.remedy
    }
}

/// Wire representation of a knowledge table row.
///
/// Field names must match `NUTRIENT_COLUMN`, `SYMPTOMS_COLUMN` and `REMEDY_COLUMN`.
#[derive(Debug, Deserialize)]
struct TableRow {
    #[serde(rename = "Vitamin")]
    nutrient: String,
    #[serde(rename = "Symptoms")]
    symptoms: String,
    #[serde(rename = "Solutions")]
    remedy: String,
}

/// Parse a knowledge table from CSV text.
///
/// # Errors
///
/// Returns:
/// - `VerveError::TableParse` if the CSV is malformed (for example a row with the wrong number
///   of fields, or invalid UTF-8),
/// - `VerveError::MissingColumn` if the header row lacks a required column,
/// - `VerveError::BlankNutrient` if a row has an empty nutrient name,
/// - `VerveError::DuplicateNutrient` if a nutrient appears on more than one row.
pub fn load<R: Read>(source: R) -> VerveResult<Vec<NutrientRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let headers = reader.headers().map_err(VerveError::TableParse)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(VerveError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let row = result.map_err(VerveError::TableParse)?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let parsed: TableRow = row
            .deserialize(Some(&headers))
            .map_err(VerveError::TableParse)?;

        let nutrient =
            NutrientName::new(&parsed.nutrient).map_err(|_| VerveError::BlankNutrient { line })?;
        if !seen.insert(nutrient.as_str().to_owned()) {
            return Err(VerveError::DuplicateNutrient(nutrient.to_string()));
        }

        records.push(NutrientRecord::new(nutrient, parsed.symptoms, parsed.remedy));
    }

    Ok(records)
}

/// In-memory knowledge table.
///
/// Loaded once at startup and read-only afterwards, so it can be shared between threads
/// (typically behind an `Arc`) without locking.
#[derive(Clone, Debug)]
pub struct KnowledgeStore {
    records: Vec<NutrientRecord>,
    vocabulary: Vec<SymptomToken>,
}

impl KnowledgeStore {
    /// Build a store from already-parsed records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `VerveError::DuplicateNutrient` if two records share a nutrient name.
    pub fn from_records(records: Vec<NutrientRecord>) -> VerveResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.nutrient().as_str()) {
                return Err(VerveError::DuplicateNutrient(record.nutrient().to_string()));
            }
        }

        let vocabulary = vocabulary::derive(&records);
        Ok(Self {
            records,
            vocabulary,
        })
    }

    /// Load a store from CSV text.
    pub fn load_from_reader<R: Read>(source: R) -> VerveResult<Self> {
        Self::from_records(load(source)?)
    }

    /// Load a store from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `VerveError::TableRead` if the file cannot be opened, or any error [`load`] returns.
    pub fn load_from_path(path: &Path) -> VerveResult<Self> {
        let file = std::fs::File::open(path).map_err(|source| VerveError::TableRead {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::load_from_reader(std::io::BufReader::new(file))?;
        tracing::info!(
            "loaded {} nutrient records ({} distinct symptoms) from {}",
            store.records.len(),
            store.vocabulary.len(),
            path.display()
        );
        Ok(store)
    }

    /// Load the knowledge table named by `cfg`.
    pub fn from_config(cfg: &CoreConfig) -> VerveResult<Self> {
        Self::load_from_path(cfg.knowledge_table())
    }

    /// All records in table order.
    pub fn records(&self) -> &[NutrientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every distinct symptom phrase in the table, sorted ordinally.
    pub fn list_symptom_vocabulary(&self) -> &[SymptomToken] {
        &self.vocabulary
    }

    /// Records whose symptom text contains any of `selected`, in table order.
    ///
    /// See [`matcher::match_records`] for the matching rules.
    pub fn find_matches<S: AsRef<str>>(
        &self,
        selected: &[S],
    ) -> VerveResult<Vec<&NutrientRecord>> {
        matcher::match_records(&self.records, selected)
    }
}
