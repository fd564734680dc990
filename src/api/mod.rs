//! Remote backend interface.
//!
//! - `types`: wire payloads and the [`ActionResponse`] model
//! - `client`: the reqwest implementation

use crate::error::ApiError;
use async_trait::async_trait;

mod client;
mod types;

pub use client::IdkClient;
pub use types::{ActionKind, ActionResponse, PromptRequest};

/// Prompt submission seam used by the dispatcher.
///
/// Tests supply scripted responses; production uses [`IdkClient`].
#[async_trait]
pub trait PromptService: Send + Sync {
    async fn submit(&self, request: &PromptRequest, token: &str)
        -> Result<ActionResponse, ApiError>;
}
