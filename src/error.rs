use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterMailError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{flag} requires an argument")]
    MissingArgument { flag: String },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("No roster file given")]
    MissingRoster,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Profile lookup failed: {0}")]
    Lookup(String),
}

pub type RosterMailResult<T> = Result<T, RosterMailError>;
