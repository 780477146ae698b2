//! HTTP client for the validation exchange.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::card::BoardSnapshot;
use crate::config::ClientConfig;
use crate::error::ValidationError;
use crate::selection::{SELECTION_SIZE, SelectionTriple};
use crate::token::SessionTokenProvider;

/// Request body for a validation call.
#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    #[serde(rename = "selectedCards")]
    selected_cards: &'a [String; SELECTION_SIZE],
}

/// Body of a successful validation response.
#[derive(Debug, Deserialize)]
struct ValidateResponse {
    #[serde(rename = "isValidSet")]
    is_valid_set: bool,
    #[serde(rename = "boardFeed")]
    board_feed: Option<BoardSnapshot>,
}

/// Structured error body on a non-success response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Outcome of a successful validation exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the submitted triple formed a valid set.
    pub is_valid_set: bool,
    /// Full replacement board, when the server sent one. `None` means no
    /// board replacement occurred; the caller must not assume one did.
    pub board: Option<BoardSnapshot>,
}

/// Submits staged selections to the authoritative server.
#[derive(Clone)]
pub struct ValidationClient {
    base_url: String,
    client: reqwest::Client,
    tokens: Arc<dyn SessionTokenProvider>,
}

impl std::fmt::Debug for ValidationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ValidationClient {
    /// Creates a client for the configured server.
    #[instrument(skip(config, tokens), fields(base_url = %config.base_url()))]
    pub fn new(
        config: &ClientConfig,
        tokens: Arc<dyn SessionTokenProvider>,
    ) -> Result<Self, ValidationError> {
        info!("Creating validation client");
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            client,
            tokens,
        })
    }

    /// Validates a latched triple against the server.
    ///
    /// Issues exactly one `POST /validate` carrying the three staged ids; the
    /// session token rides along as a query parameter when the lookup yields
    /// one, and a failed lookup is logged and absorbed, never fatal.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Transport`] for network failures or timeout,
    /// [`ValidationError::Rejected`] for a non-success response, carrying the
    /// server's error message when the body has one.
    #[instrument(skip(self), fields(cards = ?staged.ids()))]
    pub async fn validate(
        &self,
        staged: &SelectionTriple,
    ) -> Result<ValidationOutcome, ValidationError> {
        debug!("Validating staged selection");

        // Best-effort: the server creates a guest session when no token rides along.
        let session_id = match self.tokens.session_id().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Token lookup failed, proceeding without session token");
                None
            }
        };

        let mut request = self
            .client
            .post(format!("{}/validate", self.base_url))
            .json(&ValidateRequest {
                selected_cards: staged.ids(),
            });
        if let Some(id) = &session_id {
            request = request.query(&[("sessionId", id)]);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            warn!(status = %status, message = ?message, "Server rejected validation");
            return Err(ValidationError::rejected(message, status));
        }

        let body: ValidateResponse = response.json().await?;
        info!(
            is_valid_set = body.is_valid_set,
            board_len = body.board_feed.as_ref().map(|b| b.len()),
            "Validation response received"
        );

        Ok(ValidationOutcome {
            is_valid_set: body.is_valid_set,
            board: body.board_feed,
        })
    }
}
