// workflow.rs
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::GenerationError;
use crate::image_requester::{request_image, ImageRequest};
use crate::openai_client::OpenAIClient;
use crate::prompt_expander::expand_idea;

/// How the playground page turns the input into an image prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PromptMode {
    /// Expand the idea for the caption, send the idea itself to the image model.
    #[default]
    #[serde(alias = "simple")]
    Simple,
    /// Skip expansion; the raw text is both image prompt and caption.
    #[serde(alias = "custom")]
    Custom,
}

impl PromptMode {
    pub const ALL: [PromptMode; 2] = [PromptMode::Simple, PromptMode::Custom];

    pub fn label(&self) -> &'static str {
        match self {
            PromptMode::Simple => "Simple",
            PromptMode::Custom => "Custom",
        }
    }
}

/// Result of one submission: what to show and what was actually sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generation {
    pub image_url: String,
    pub caption: String,
    pub image_prompt: String,
    pub mode: PromptMode,
    pub model: Option<String>,
}

/// Owns the configuration and the shared HTTP session, and runs one linear
/// pipeline per submission.
pub struct Playground {
    config: AppConfig,
    client: OpenAIClient,
}

impl Playground {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let client = OpenAIClient::new(&config.openai_base, &config.openai_key)?;
        Ok(Playground { config, client })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Expands the idea for the caption, then asks for a fixed-size image of
    /// the original idea.
    pub async fn run_simple(&self, idea: &str) -> Result<Generation, GenerationError> {
        if idea.is_empty() {
            return Err(GenerationError::EmptyIdea);
        }
        let request_id = Uuid::new_v4();
        info!("[{}] Generating prompt...", request_id);
        let caption = expand_idea(&self.client, idea).await?;

        // The image model gets the idea, not the expanded caption.
        info!("[{}] Generating image...", request_id);
        let request = ImageRequest::sized(idea);
        let image_url = request_image(&self.client, &request).await?;
        info!("[{}] Done", request_id);

        Ok(Generation {
            image_url,
            caption,
            image_prompt: request.prompt().to_string(),
            mode: PromptMode::Simple,
            model: None,
        })
    }

    /// Playground pipeline with a selectable mode and image model. `model`
    /// must be one of the configured models; `None` picks the default.
    pub async fn run_extended(
        &self,
        idea: &str,
        mode: PromptMode,
        model: Option<&str>,
    ) -> Result<Generation, GenerationError> {
        if idea.is_empty() {
            return Err(GenerationError::EmptyIdea);
        }
        let model = self.config.resolve_model(model)?;
        let request_id = Uuid::new_v4();
        info!("[{}] {} mode with model {}", request_id, mode.label(), model);

        let caption = match mode {
            PromptMode::Simple => {
                info!("[{}] Generating prompt...", request_id);
                expand_idea(&self.client, idea).await?
            }
            PromptMode::Custom => idea.to_string(),
        };

        info!("[{}] Generating image...", request_id);
        let request = ImageRequest::for_model(model, idea);
        let image_url = request_image(&self.client, &request).await?;
        info!("[{}] Done", request_id);

        Ok(Generation {
            image_url,
            caption,
            image_prompt: request.prompt().to_string(),
            mode,
            model: Some(model.to_string()),
        })
    }
}
