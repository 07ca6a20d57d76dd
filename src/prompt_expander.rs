// prompt_expander.rs
use lazy_static::lazy_static;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tiktoken_rs::{cl100k_base, CoreBPE};

use crate::error::GenerationError;
use crate::openai_client::OpenAIClient;
use crate::prompt_template::{build_expansion_prompt, EXAMPLE_PROMPTS};

pub const CHAT_MODEL: &str = "gpt-3.5-turbo-16k";
const CHAT_CONTEXT_TOKENS: usize = 16_384;
const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

lazy_static! {
    static ref TOKENIZER: Option<CoreBPE> = cl100k_base().ok();
}

#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest {
    messages: Vec<Message>,
    model: &'static str,
}

#[derive(Serialize, Debug)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
    #[serde(default)]
    total_tokens: u64,
}

/// Single user message carrying the filled template. Sampling parameters are
/// left to the endpoint defaults.
pub fn chat_request(idea: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        messages: vec![Message {
            role: "user",
            content: build_expansion_prompt(idea, &EXAMPLE_PROMPTS),
        }],
        model: CHAT_MODEL,
    }
}

pub fn count_tokens(text: &str) -> Option<usize> {
    TOKENIZER
        .as_ref()
        .map(|tokenizer| tokenizer.encode_with_special_tokens(text).len())
}

/// Turns a short idea into a detailed image prompt via the chat completion endpoint.
pub async fn expand_idea(client: &OpenAIClient, idea: &str) -> Result<String, GenerationError> {
    info!("Sending request to LLM to expand the idea into a prompt.");
    let request = chat_request(idea);

    match count_tokens(&request.messages[0].content) {
        Some(tokens) if tokens > CHAT_CONTEXT_TOKENS => {
            warn!("Expansion prompt is {} tokens, over the {} token window of {}", tokens, CHAT_CONTEXT_TOKENS, CHAT_MODEL)
        }
        Some(tokens) => debug!("Expansion prompt token count: {}", tokens),
        None => debug!("Tokenizer unavailable, skipping token count"),
    }

    let response: ChatCompletionResponse = client.post_json(CHAT_COMPLETIONS_PATH, &request).await?;

    if let Some(usage) = &response.usage {
        info!(
            "Token usage - Prompt tokens: {}, Completion tokens: {}, Total tokens: {}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::malformed(client.endpoint(CHAT_COMPLETIONS_PATH), "no choices returned"))?;

    choice.message.content.ok_or_else(|| {
        GenerationError::malformed(
            client.endpoint(CHAT_COMPLETIONS_PATH),
            "first choice has no message content",
        )
    })
}
