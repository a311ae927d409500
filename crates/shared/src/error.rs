use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`; type `help` for the list of commands")]
    Unknown(String),
    #[error("invalid argument `{argument}` for `{command}`")]
    InvalidArgument {
        command: &'static str,
        argument: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },
    #[error("invalid value `{value}` for {field}")]
    InvalidValue { field: &'static str, value: String },
}

impl ConfigError {
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}
