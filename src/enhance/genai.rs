//! GenAI-backed enhancer
//!
//! Talks to a hosted model through the `genai` crate. The endpoint can be
//! redirected with `READMEBUDDY_API_BASE_URL` for proxies and test servers.

use super::prompt::{user_prompt, SYSTEM_PROMPT};
use super::{EnhanceError, EnhanceInput, EnhancedDescription, Enhancer};
use async_trait::async_trait;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use genai::resolver::{AuthData, Endpoint, ServiceTargetResolver};
use genai::{Client, ServiceTarget};
use std::time::Duration;
use tracing::{debug, error};

/// Default model when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const TEMPERATURE: f64 = 0.7;

pub struct GenAiEnhancer {
    client: Client,
    model: String,
    timeout: Duration,
}

impl GenAiEnhancer {
    pub fn new(model: impl Into<String>, timeout: Duration) -> Self {
        let custom_endpoint = std::env::var("READMEBUDDY_API_BASE_URL").ok();

        let client = if let Some(endpoint_url) = custom_endpoint {
            debug!("Using custom endpoint: {}", endpoint_url);

            let resolver = ServiceTargetResolver::from_resolver_fn(
                move |service_target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                    let endpoint = Endpoint::from_owned(endpoint_url.clone());

                    let auth = match service_target.model.adapter_kind.default_key_env_name() {
                        Some(api_key_var) => AuthData::from_env(api_key_var),
                        None => AuthData::from_single(""),
                    };

                    Ok(ServiceTarget {
                        endpoint,
                        auth,
                        model: service_target.model,
                    })
                },
            );

            Client::builder()
                .with_service_target_resolver(resolver)
                .build()
        } else {
            Client::default()
        };

        Self {
            client,
            model: model.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Enhancer for GenAiEnhancer {
    async fn enhance(&self, input: EnhanceInput) -> Result<EnhancedDescription, EnhanceError> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_prompt(&input)),
        ]);

        let options = ChatOptions::default().with_temperature(TEMPERATURE);

        let response = match tokio::time::timeout(
            self.timeout,
            self.client.exec_chat(&self.model, request, Some(&options)),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                error!("enhancement request failed: {}", e);
                return Err(EnhanceError::Api {
                    message: e.to_string(),
                });
            }
            Err(_) => {
                error!(
                    "enhancement request timed out after {}s",
                    self.timeout.as_secs()
                );
                return Err(EnhanceError::Timeout {
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        let text = response.first_text().unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(EnhanceError::InvalidResponse {
                message: "model returned no text".to_string(),
            });
        }

        Ok(EnhancedDescription {
            enhanced_description: text,
        })
    }

    fn name(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for GenAiEnhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenAiEnhancer")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhancer_creation() {
        let enhancer = GenAiEnhancer::new(DEFAULT_MODEL, Duration::from_secs(30));
        assert_eq!(enhancer.name(), "gemini-2.0-flash");
    }

    #[test]
    fn test_debug_impl() {
        fn assert_debug<T: std::fmt::Debug>() {}
        assert_debug::<GenAiEnhancer>();
    }
}
