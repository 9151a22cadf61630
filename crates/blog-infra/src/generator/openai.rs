//! OpenAI Responses API article generator.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use blog_core::error::GeneratorError;
use blog_core::ports::{ArticleGenerator, ArticleRequest};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a writer specializing in parties, events and in-home catering.";

/// Connection and prompt settings for [`OpenAiArticleGenerator`].
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub system_prompt: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// Generates article HTML through `POST {base_url}/responses`.
pub struct OpenAiArticleGenerator {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl OpenAiArticleGenerator {
    pub fn new(config: OpenAiConfig) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeneratorError::Request(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.config.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: Vec<InputMessage<'a>>,
}

#[derive(Serialize)]
struct InputMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: Option<String>,
}

fn user_prompt(topic: &str) -> String {
    format!(
        "Write an HTML article about the topic: \"{topic}\". \
         Use a warm, refined and practical tone. Include a title, subheadings and paragraphs. \
         Do not use an <h1> heading, only <h2> and <h3>."
    )
}

/// Text of the first content part of the first output message.
fn first_text(reply: ResponsesReply) -> Result<String, GeneratorError> {
    reply
        .output
        .into_iter()
        .flat_map(|item| item.content)
        .find_map(|part| part.text)
        .ok_or_else(|| GeneratorError::InvalidResponse("no text in response output".to_string()))
}

#[async_trait]
impl ArticleGenerator for OpenAiArticleGenerator {
    async fn generate(&self, request: &ArticleRequest) -> Result<String, GeneratorError> {
        let body = ResponsesRequest {
            model: &self.config.model,
            input: vec![
                InputMessage {
                    role: "system",
                    content: self.config.system_prompt.clone(),
                },
                InputMessage {
                    role: "user",
                    content: user_prompt(&request.topic),
                },
            ],
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Text generation request rejected");
            return Err(GeneratorError::Request(format!("status {status}: {detail}")));
        }

        let reply: ResponsesReply = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        first_text(reply)
    }
}
