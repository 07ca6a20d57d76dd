// image_requester.rs
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::openai_client::OpenAIClient;

pub const IMAGE_SIZE: &str = "512x512";
const IMAGE_GENERATIONS_PATH: &str = "images/generations";

/// Body of an image generation call. The simple page asks for a fixed size,
/// the playground page names a model and asks for a single image.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ImageRequest {
    Sized {
        prompt: String,
        size: &'static str,
    },
    Model {
        model: String,
        prompt: String,
        n: u8,
    },
}

impl ImageRequest {
    pub fn sized(prompt: &str) -> Self {
        ImageRequest::Sized {
            prompt: prompt.to_string(),
            size: IMAGE_SIZE,
        }
    }

    pub fn for_model(model: &str, prompt: &str) -> Self {
        ImageRequest::Model {
            model: model.to_string(),
            prompt: prompt.to_string(),
            n: 1,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            ImageRequest::Sized { prompt, .. } | ImageRequest::Model { prompt, .. } => prompt,
        }
    }
}

#[derive(Deserialize, Debug)]
struct CreateImageResponse {
    data: Vec<ImageData>,
}

#[derive(Deserialize, Debug)]
struct ImageData {
    url: String,
}

/// Requests an image and returns the URL of the first result.
pub async fn request_image(client: &OpenAIClient, request: &ImageRequest) -> Result<String, GenerationError> {
    debug!("Sending generate image request: {:?}", request);

    let response: CreateImageResponse = client.post_json(IMAGE_GENERATIONS_PATH, request).await?;
    debug!("Parsed response: {:?}", response);

    match response.data.into_iter().next() {
        Some(image_data) => {
            info!("Image generated. URL: {}", image_data.url);
            Ok(image_data.url)
        }
        None => Err(GenerationError::malformed(
            client.endpoint(IMAGE_GENERATIONS_PATH),
            "No image URL returned",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StubReply, StubUpstream};
    use serde_json::json;

    #[test]
    fn sized_body_has_prompt_and_fixed_size() {
        let body = serde_json::to_value(ImageRequest::sized("a red fox")).unwrap();
        assert_eq!(body, json!({"prompt": "a red fox", "size": "512x512"}));
    }

    #[test]
    fn model_body_has_model_prompt_and_single_image() {
        let body = serde_json::to_value(ImageRequest::for_model("dall-e-3", "a red fox")).unwrap();
        assert_eq!(body, json!({"model": "dall-e-3", "prompt": "a red fox", "n": 1}));
    }

    #[test]
    fn prompt_accessor_covers_both_shapes() {
        assert_eq!(ImageRequest::sized("one").prompt(), "one");
        assert_eq!(ImageRequest::for_model("dall-e-2", "two").prompt(), "two");
    }

    #[actix_web::test]
    async fn returns_first_image_url() {
        let stub = StubUpstream::start(
            StubReply::json(json!({})),
            StubReply::json(json!({
                "created": 1700000000,
                "data": [{"url": "http://img"}, {"url": "http://img-2"}]
            })),
        )
        .await;
        let client = OpenAIClient::new(&stub.base, "test-key").unwrap();

        let url = request_image(&client, &ImageRequest::for_model("dall-e-2", "a red fox"))
            .await
            .unwrap();

        assert_eq!(url, "http://img");
        assert_eq!(
            stub.image_bodies(),
            vec![json!({"model": "dall-e-2", "prompt": "a red fox", "n": 1})]
        );
    }

    #[actix_web::test]
    async fn missing_data_is_an_error() {
        let stub = StubUpstream::start(
            StubReply::json(json!({})),
            StubReply::json(json!({"created": 1700000000})),
        )
        .await;
        let client = OpenAIClient::new(&stub.base, "test-key").unwrap();

        let err = request_image(&client, &ImageRequest::sized("a red fox")).await.unwrap_err();

        assert_eq!(err.kind(), "malformed_response");
        assert!(err.to_string().contains("data"));
    }

    #[actix_web::test]
    async fn empty_data_is_an_error() {
        let stub = StubUpstream::start(StubReply::json(json!({})), StubReply::json(json!({"data": []}))).await;
        let client = OpenAIClient::new(&stub.base, "test-key").unwrap();

        let err = request_image(&client, &ImageRequest::sized("a red fox")).await.unwrap_err();

        assert!(err.to_string().contains("No image URL returned"));
    }

    #[actix_web::test]
    async fn content_policy_rejection_surfaces() {
        let stub = StubUpstream::start(
            StubReply::json(json!({})),
            StubReply::status(
                400,
                r#"{"error":{"code":"content_policy_violation","message":"Your request was rejected"}}"#,
            ),
        )
        .await;
        let client = OpenAIClient::new(&stub.base, "test-key").unwrap();

        let err = request_image(&client, &ImageRequest::sized("something")).await.unwrap_err();

        assert!(matches!(err, GenerationError::Upstream { status: 400, .. }));
        assert!(err.to_string().contains("content_policy_violation"));
    }
}
