/// A value that violates one of the configuration model's invariants.
#[derive(derive_more::Error, derive_more::Display, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[display("Run policy '{name}' must have at least one trial")]
    NoTrials { name: String },
    #[display("Run policy '{name}' must have at least one thread count")]
    NoThreadCounts { name: String },
    #[display("Run policy '{name}' thread counts must be positive and strictly increasing: {thread_counts:?}")]
    UnorderedThreadCounts {
        name: String,
        thread_counts: Vec<u32>,
    },
    #[display("Run policy '{name}' has invalid {field}: {value}")]
    InvalidRunParameter {
        name: String,
        field: &'static str,
        value: u64,
    },
    #[display("Data structure config '{name}' has zero {field}")]
    ZeroDataStructureParameter { name: String, field: &'static str },
    #[display("Chart '{name}' has no curves")]
    EmptyChart { name: String },
    #[display("Chart '{chart}' has two curves sharing the cache prefix '{prefix}'")]
    DuplicateCurve { chart: String, prefix: String },
    #[display("Unknown {kind} token '{token}'")]
    UnknownStyleToken { kind: &'static str, token: String },
}

/// A failure to load or resolve the declarative experiment catalog.
#[derive(derive_more::Error, derive_more::Display, Debug)]
pub enum CatalogError {
    #[display("Failed to read catalog {}: {source}", path.display())]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[display("Failed to parse catalog: {_0}")]
    Parse(toml::de::Error),
    #[display("Unknown {kind} '{key}' referenced by {referenced_by}")]
    UnknownReference {
        kind: &'static str,
        key: String,
        referenced_by: String,
    },
    #[display("Invalid configuration: {_0}")]
    Invalid(ModelError),
}

impl From<ModelError> for CatalogError {
    fn from(e: ModelError) -> Self {
        CatalogError::Invalid(e)
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Parse(e)
    }
}
