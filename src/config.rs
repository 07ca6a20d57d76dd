// config.rs
use anyhow::{anyhow, Context, Result};
use std::env;

use crate::error::GenerationError;

pub const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODELS: &str = "dall-e-2";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Settings read once at start-up and handed to the rest of the app by reference.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_base: String,
    pub openai_key: String,
    pub models: Vec<String>,
    pub default_model: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let openai_base = get("OPENAI_BASE")
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        let openai_key = get("OPENAI_KEY").ok_or_else(|| anyhow!("OPENAI_KEY not set"))?;

        let models = parse_models(&get("MODELS").unwrap_or_else(|| DEFAULT_MODELS.to_string()));
        if models.is_empty() {
            return Err(anyhow!("MODELS does not list any model"));
        }

        let default_model = match get("DEFAULT_MODEL") {
            Some(model) => model.trim().to_string(),
            None => models[0].clone(),
        };
        if !models.contains(&default_model) {
            return Err(anyhow!(
                "DEFAULT_MODEL '{}' is not listed in MODELS ({})",
                default_model,
                models.join("|")
            ));
        }

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT '{}' is not a valid port", port))?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            openai_base,
            openai_key,
            models,
            default_model,
            host,
            port,
        })
    }

    /// Picks the image model for a request. No selection means the default.
    pub fn resolve_model(&self, requested: Option<&str>) -> Result<&str, GenerationError> {
        match requested.map(str::trim).filter(|model| !model.is_empty()) {
            None => Ok(&self.default_model),
            Some(model) => self
                .models
                .iter()
                .find(|known| known.as_str() == model)
                .map(String::as_str)
                .ok_or_else(|| GenerationError::UnknownModel(model.to_string())),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Splits a pipe-delimited model list, dropping blanks.
pub fn parse_models(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .map(String::from)
        .collect()
}
