//! Retry Controller — bounded orchestration between generation and validation.
//!
//! State machine: `Requesting → Validating → {Success, Requesting, TerminalFailure}`.
//! The generator is stochastic, so a Malformed result is retried with the
//! SAME prompt up to the policy bound. Transport failures and deadline
//! cancellations are terminal on first occurrence: only malformed *output*
//! is worth another paid generation call.
//!
//! A controller is single-use: `run` consumes it, and callers construct a
//! fresh one per extraction request. No partial record is ever exposed —
//! callers get a complete `StructuredRecord` or a failure.

use std::time::Duration;

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extraction::validator::validate;
use crate::llm_client::{GenerationClient, TransportError};
use crate::models::record::StructuredRecord;

/// Bounded retry policy for one extraction request.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total generation attempts allowed (first call included).
    pub max_attempts: u32,
    /// Deadline applied to each individual generation call.
    pub request_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// A successful extraction: the validated record plus the number of
/// generation calls it consumed.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub record: StructuredRecord,
    pub attempts: u32,
}

/// Terminal failure of an extraction request.
#[derive(Debug)]
pub enum ExtractionFailure {
    /// The generation service failed at the transport level. Never retried:
    /// the caller decides whether another paid call is worth it.
    Transport(TransportError),
    /// Every attempt produced output that failed schema validation. Carries
    /// the last attempt's raw text for diagnostics.
    MalformedOutput { last_output: String, attempts: u32 },
    /// The per-call deadline elapsed. Not retried.
    Cancelled,
}

impl From<ExtractionFailure> for AppError {
    fn from(failure: ExtractionFailure) -> Self {
        match failure {
            ExtractionFailure::Transport(e) => AppError::Transport(e),
            ExtractionFailure::MalformedOutput {
                last_output,
                attempts,
            } => AppError::ModelOutput {
                attempts,
                last_output,
            },
            ExtractionFailure::Cancelled => AppError::Cancelled,
        }
    }
}

/// Controller states between the terminal outcomes.
enum State {
    Requesting { attempt: u32 },
    Validating { attempt: u32, text: String },
}

/// Single-use retry controller. Construct one per extraction request.
pub struct ExtractionController {
    policy: RetryPolicy,
}

impl ExtractionController {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Drives the state machine to a terminal outcome, re-requesting with
    /// the same prompt on malformed output while attempts remain.
    pub async fn run(
        self,
        client: &dyn GenerationClient,
        prompt: &str,
    ) -> Result<Extraction, ExtractionFailure> {
        let mut state = State::Requesting { attempt: 1 };

        loop {
            state = match state {
                State::Requesting { attempt } => {
                    debug!(attempt, "requesting generation");
                    let generated =
                        tokio::time::timeout(self.policy.request_timeout, client.generate(prompt))
                            .await;
                    match generated {
                        Err(_elapsed) => {
                            warn!(attempt, "generation call exceeded deadline — cancelled");
                            return Err(ExtractionFailure::Cancelled);
                        }
                        Ok(Err(e)) => {
                            warn!(attempt, "transport failure: {e}");
                            return Err(ExtractionFailure::Transport(e));
                        }
                        Ok(Ok(text)) => State::Validating { attempt, text },
                    }
                }

                State::Validating { attempt, text } => match validate(&text) {
                    Ok(record) => {
                        debug!(attempt, "extraction validated");
                        return Ok(Extraction {
                            record,
                            attempts: attempt,
                        });
                    }
                    Err(malformed) => {
                        if attempt < self.policy.max_attempts {
                            warn!(
                                attempt,
                                max_attempts = self.policy.max_attempts,
                                "malformed output ({}) — retrying with same prompt",
                                malformed.reason
                            );
                            State::Requesting {
                                attempt: attempt + 1,
                            }
                        } else {
                            warn!(
                                attempt,
                                "malformed output on final attempt ({})", malformed.reason
                            );
                            return Err(ExtractionFailure::MalformedOutput {
                                last_output: malformed.raw,
                                attempts: attempt,
                            });
                        }
                    }
                },
            };
        }
    }
}
