// ============================================================================
// File: src/generator.rs
// Validation and dispatch for one generation call
// ============================================================================

use crate::error::GenerateError;
use crate::llm_client::ChatCompletion;
use crate::prompt::build_prompt;
use crate::request::GenerationRequest;

/// Turns a GenerationRequest into exactly one remote call. Validation happens
/// here, before any network activity: credential first, then interest.
pub struct TopicGenerator {
    client: Box<dyn ChatCompletion>,
}

impl TopicGenerator {
    pub fn new(client: Box<dyn ChatCompletion>) -> Self {
        Self { client }
    }

    /// Returns the raw response text unmodified, or a terminal error.
    /// No retry is attempted on failure.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        if request.credential.is_empty() {
            return Err(GenerateError::MissingCredential);
        }
        if request.interest.is_empty() {
            return Err(GenerateError::MissingInterest);
        }

        let prompt = build_prompt(request);
        self.client.complete(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::AcademicLevel;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records every prompt it receives and replies with a canned result.
    #[derive(Clone)]
    struct FakeClient {
        calls: Arc<Mutex<Vec<String>>>,
        reply: Result<String, GenerateError>,
    }

    impl FakeClient {
        fn replying(reply: Result<String, GenerateError>) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                reply,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn payload(&self, index: usize) -> String {
            self.calls.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl ChatCompletion for FakeClient {
        async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
            self.calls.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            interest: "Quantum Computing".to_string(),
            focus: None,
            level: AcademicLevel::Phd,
            count: 5,
            trends: true,
            interdisciplinary: false,
            credential: "valid-key".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_credential_fails_without_a_call() {
        let client = FakeClient::replying(Ok("x".into()));
        let generator = TopicGenerator::new(Box::new(client.clone()));

        let mut req = request();
        req.credential = String::new();

        assert_eq!(
            generator.generate(&req).await,
            Err(GenerateError::MissingCredential)
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_interest_fails_without_a_call() {
        let client = FakeClient::replying(Ok("x".into()));
        let generator = TopicGenerator::new(Box::new(client.clone()));

        let mut req = request();
        req.interest = String::new();

        assert_eq!(
            generator.generate(&req).await,
            Err(GenerateError::MissingInterest)
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn credential_check_comes_before_interest_check() {
        let client = FakeClient::replying(Ok("x".into()));
        let generator = TopicGenerator::new(Box::new(client.clone()));

        let mut req = request();
        req.credential = String::new();
        req.interest = String::new();

        assert_eq!(
            generator.generate(&req).await,
            Err(GenerateError::MissingCredential)
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn valid_request_issues_exactly_one_call_with_all_fields() {
        let client = FakeClient::replying(Ok("five topics".into()));
        let generator = TopicGenerator::new(Box::new(client.clone()));

        let result = generator.generate(&request()).await;
        assert_eq!(result, Ok("five topics".to_string()));
        assert_eq!(client.call_count(), 1);

        let payload = client.payload(0);
        assert!(payload.contains("Quantum Computing"));
        assert!(payload.contains("No specific focus"));
        assert!(payload.contains("PhD"));
        assert!(payload.contains("Generate 5 compelling"));
        assert!(payload.contains("Yes, focus on current trends"));
        assert!(payload.contains("Focus on single discipline"));
    }

    #[tokio::test]
    async fn response_text_is_passed_through_unmodified() {
        let text = "**Topic 1: T**\nbody\n\n---\n";
        let client = FakeClient::replying(Ok(text.into()));
        let generator = TopicGenerator::new(Box::new(client.clone()));

        assert_eq!(generator.generate(&request()).await, Ok(text.to_string()));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn transport_failure_surfaces_the_original_message_without_retry() {
        let client = FakeClient::replying(Err(GenerateError::GenerationFailed(
            "connection refused".into(),
        )));
        let generator = TopicGenerator::new(Box::new(client.clone()));

        assert_eq!(
            generator.generate(&request()).await,
            Err(GenerateError::GenerationFailed("connection refused".into()))
        );
        assert_eq!(client.call_count(), 1);
    }
}
