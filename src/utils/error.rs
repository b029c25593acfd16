use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("YAML rendering failed: {0}")]
    RenderError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot allocate {count} entries: {source}")]
    CapacityError {
        count: usize,
        #[source]
        source: std::collections::TryReserveError,
    },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GeneratorError {
    /// Process exit status for a fatal error. Usage errors never get here,
    /// clap reports those itself with status 2.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GeneratorError::RenderError(_) => "This is a bug in the generator, please report it",
            GeneratorError::IoError(_) => "Check that standard output is writable (closed pipe?)",
            GeneratorError::CapacityError { .. } => "Ask for fewer entries with --count",
            GeneratorError::InvalidConfigValueError { .. } => "Check the command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
