//! Structured-extraction pipeline: prompt building, contract validation,
//! bounded retry, and orchestration.

pub mod controller;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod validator;
