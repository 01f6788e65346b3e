use thiserror::Error;

#[derive(Debug, Error)]
pub enum AquaforgeError {
    #[error("Pond '{0}' not found")]
    PondNotFound(String),

    #[error("Pond '{0}' already exists")]
    DuplicatePond(String),

    #[error("Pond '{pond_id}' already has a sampling on {date}")]
    DuplicateSampling { pond_id: String, date: chrono::NaiveDate },

    #[error("No {kind} record with id '{id}'")]
    RecordNotFound { kind: &'static str, id: String },

    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
