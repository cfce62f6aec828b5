//! Fixed-bound retry around the completion boundary.
//!
//! The policy is deliberately simple: a fixed attempt count and a fixed
//! sleep between failures, applied to every failure kind alike. No
//! backoff, no jitter. Both knobs are fields rather than constants so
//! callers (and tests) can tune them.

use adforge_core::SamplingParams;
use std::time::Duration;
use thiserror::Error;

use crate::provider::{ChatMessage, Completion, CompletionError, CompletionProvider};

/// How often and how patiently to retry a failed completion.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 behave as 1.
    pub max_attempts: u32,
    /// Sleep between consecutive attempts. Not applied after the last.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

/// Terminal failure after the retry bound is spent.
#[derive(Debug, Error)]
pub enum RetryError {
    #[error("all {attempts} attempts failed: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: CompletionError,
    },
}

/// Call the provider until it succeeds or the bound is spent.
pub async fn complete_with_retry(
    provider: &dyn CompletionProvider,
    model: &str,
    messages: &[ChatMessage],
    params: &SamplingParams,
    policy: &RetryPolicy,
) -> Result<Completion, RetryError> {
    let attempts = policy.max_attempts.max(1);
    let mut last = CompletionError::Unavailable("no attempt was made".to_string());

    for attempt in 1..=attempts {
        match provider.complete(model, messages, params).await {
            Ok(completion) => return Ok(completion),
            Err(e) => {
                tracing::warn!(
                    provider = provider.name(),
                    attempt,
                    max_attempts = attempts,
                    error = %e,
                    "completion attempt failed"
                );
                last = e;
                if attempt < attempts {
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
    }

    Err(RetryError::Exhausted { attempts, last })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails the first `failures` calls, then succeeds.
    struct FlakyProvider {
        failures: u32,
        calls: AtomicU32,
    }

    impl FlakyProvider {
        fn new(failures: u32) -> Self {
            Self {
                failures,
                calls: AtomicU32::new(0),
            }
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionProvider for FlakyProvider {
        fn name(&self) -> &'static str {
            "flaky"
        }

        fn api_key_env_var(&self) -> &'static str {
            "FLAKY_API_KEY"
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn supported_models(&self) -> Vec<&str> {
            vec!["test-model"]
        }

        async fn complete(
            &self,
            model: &str,
            _messages: &[ChatMessage],
            _params: &SamplingParams,
        ) -> Result<Completion, CompletionError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call <= self.failures {
                Err(CompletionError::Unavailable(format!("outage #{}", call)))
            } else {
                Ok(Completion {
                    text: "generated".to_string(),
                    model: model.to_string(),
                    usage: Default::default(),
                })
            }
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn test_success_on_third_attempt_makes_exactly_three_calls() {
        let provider = FlakyProvider::new(2);
        let result = complete_with_retry(
            &provider,
            "test-model",
            &[ChatMessage::user("hi")],
            &SamplingParams::default(),
            &fast_policy(),
        )
        .await;

        assert_eq!(result.unwrap().text, "generated");
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_no_calls_after_first_success() {
        let provider = FlakyProvider::new(0);
        complete_with_retry(
            &provider,
            "test-model",
            &[ChatMessage::user("hi")],
            &SamplingParams::default(),
            &fast_policy(),
        )
        .await
        .unwrap();

        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_always_failing_provider_spends_exactly_the_bound() {
        let provider = FlakyProvider::new(u32::MAX);
        let result = complete_with_retry(
            &provider,
            "test-model",
            &[ChatMessage::user("hi")],
            &SamplingParams::default(),
            &fast_policy(),
        )
        .await;

        match result {
            Err(RetryError::Exhausted { attempts, last }) => {
                assert_eq!(attempts, 3);
                assert!(matches!(last, CompletionError::Unavailable(_)));
            }
            Ok(_) => panic!("expected exhaustion"),
        }
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_zero_attempt_policy_behaves_as_one() {
        let provider = FlakyProvider::new(u32::MAX);
        let policy = RetryPolicy {
            max_attempts: 0,
            delay: Duration::ZERO,
        };
        let result = complete_with_retry(
            &provider,
            "test-model",
            &[ChatMessage::user("hi")],
            &SamplingParams::default(),
            &policy,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(provider.call_count(), 1);
    }
}
