use crate::{Error, Result, config::PersonaConfig};
use std::{fmt, sync::Arc};
use tracing::{debug, info};

const BUILTIN_PERSONA: &str = include_str!("../../assets/persona.txt");

/// Institutional facts and behavioural instructions prepended to every prompt.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPersona {
    text: Arc<str>,
}

impl SystemPersona {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::config("Persona text must not be empty"));
        }
        Ok(Self {
            text: Arc::from(text.trim()),
        })
    }

    pub fn builtin() -> Self {
        Self {
            text: Arc::from(BUILTIN_PERSONA.trim()),
        }
    }

    pub async fn load(config: &PersonaConfig) -> Result<Self> {
        match &config.path {
            Some(path) => {
                debug!("Loading persona from: {}", path.display());
                let text = tokio::fs::read_to_string(path).await?;
                let persona = Self::new(text)?;
                info!(
                    "Persona loaded from {} ({} bytes)",
                    path.display(),
                    persona.as_str().len()
                );
                Ok(persona)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SystemPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
