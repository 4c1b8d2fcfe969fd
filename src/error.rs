use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to write client output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid demo configuration: {message}")]
    Config { message: String },

    #[error("Unknown factory variant {0} (expected 1 or 2)")]
    UnknownVariant(u8),

    #[error("Configuration lists no factory variants to run")]
    NoVariants,
}

impl DemoError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for DemoError {
    fn from(err: toml::de::Error) -> Self {
        DemoError::config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
