use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    /// Short label for log fields. Only used for diagnostics, never for control flow.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Llm(_) => "llm",
            Self::Yaml(_) => "yaml",
            Self::Io(_) => "io",
            Self::AddrParse(_) => "addr_parse",
            Self::OpenAi(async_openai::error::OpenAIError::Reqwest(..)) => "network",
            Self::OpenAi(async_openai::error::OpenAIError::ApiError(..)) => "api",
            Self::OpenAi(async_openai::error::OpenAIError::JSONDeserialize(..)) => "malformed_response",
            Self::OpenAi(_) => "openai",
        }
    }
}
