//! Constants used throughout the Verve core crate.
//!
//! Column names are part of the knowledge table format and must match the header row exactly.

/// Column holding the nutrient name, the unique key of each row.
pub const NUTRIENT_COLUMN: &str = "Vitamin";

/// Column holding the comma-separated symptom phrases.
pub const SYMPTOMS_COLUMN: &str = "Symptoms";

/// Column holding the remedy text.
pub const REMEDY_COLUMN: &str = "Solutions";

/// Columns a knowledge table must provide, in the order they are reported when missing.
pub const REQUIRED_COLUMNS: [&str; 3] = [NUTRIENT_COLUMN, SYMPTOMS_COLUMN, REMEDY_COLUMN];

/// Delimiter between phrases inside the symptoms column.
pub const SYMPTOM_DELIMITER: char = ',';

/// Location of the bundled knowledge table, relative to the workspace root.
pub const KNOWLEDGE_TABLE_PATH: &str = "crates/core/data/nutrients.csv";
