//! HTTP client for the platform's REST API.
//!
//! Every endpoint is a JSON POST under one base URL, authenticated with a
//! bearer session token when one is configured. The client implements all
//! three ports; nothing here retries — a failed call propagates and the
//! caller surfaces it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::dto::{
    BetGroupDto, Envelope, GameDto, GameFilter, ListRequest, Range, ResultDto, SaveBetData,
    SaveBetRequest, SortSpec, UserFilter, WalletStats,
};
use crate::config::Config;
use crate::domain::{Amount, BetGroup, Game, GameId, GameResult, GameStatus, UserId, Wager};
use crate::error::{ApiError, Result};
use crate::port::{BalanceSource, BetGateway, GameCatalog, SubmissionReceipt};

/// HTTP client for the platform API.
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    session_token: Option<String>,
}

impl ApiClient {
    /// Create a client with default HTTP settings and no session token.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
            session_token: None,
        }
    }

    /// Build a client from configuration (timeouts, base URL, token).
    pub fn from_config(config: &Config) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.network.timeout_ms))
            .connect_timeout(Duration::from_millis(config.network.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.network.api_url.clone(),
            session_token: config.session_token.clone(),
        }
    }

    /// Attach a session token after login.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = &self.session_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let envelope = response.json::<Envelope<T>>().await?;
        Ok(envelope)
    }

    /// The wallet stats block, after the usual envelope checks.
    async fn wallet_stats(&self, user: &UserId) -> Result<WalletStats> {
        let request = ListRequest {
            filter: UserFilter {
                user_id: user.clone(),
            },
            range: Range { all: true },
            sort: vec![SortSpec::asc("walletId")],
        };

        let envelope: Envelope<serde_json::Value> = self.post("/wallet/list", &request).await?;
        if !envelope.success {
            return Err(ApiError::Rejected {
                message: envelope
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
            }
            .into());
        }
        envelope
            .stats
            .ok_or_else(|| ApiError::MissingData { field: "stats" }.into())
    }
}

#[async_trait]
impl BalanceSource for ApiClient {
    async fn current_balance(&self, user: &UserId) -> Result<Amount> {
        let stats = self.wallet_stats(user).await?;
        // A wallet with no transactions has no stat yet
        Ok(stats.totalbalance.unwrap_or(Decimal::ZERO))
    }

    async fn winning_balance(&self, user: &UserId) -> Result<Amount> {
        let stats = self.wallet_stats(user).await?;
        Ok(stats.total_winning_balance.unwrap_or(Decimal::ZERO))
    }
}

#[async_trait]
impl BetGateway for ApiClient {
    async fn submit(&self, game: &GameId, wagers: &[Wager]) -> Result<SubmissionReceipt> {
        let request = SaveBetRequest {
            game_id: game,
            bets: wagers,
        };

        let envelope: Envelope<SaveBetData> = self.post("/game/save-user-bet", &request).await?;
        if !envelope.success {
            return Err(ApiError::Rejected {
                message: envelope
                    .message
                    .unwrap_or_else(|| "bet rejected".to_string()),
            }
            .into());
        }

        Ok(SubmissionReceipt {
            bet_id: envelope.data.and_then(|data| data.bet_id),
            message: envelope.message,
        })
    }
}

#[async_trait]
impl GameCatalog for ApiClient {
    async fn games(&self, status: GameStatus) -> Result<Vec<Game>> {
        let request = ListRequest {
            filter: GameFilter {
                game_status: vec![status],
            },
            range: Range { all: true },
            sort: vec![SortSpec::asc("startTime")],
        };

        let envelope: Envelope<Vec<GameDto>> = self.post("/game/list", &request).await?;
        envelope
            .into_data("data")?
            .into_iter()
            .map(Game::try_from)
            .collect()
    }

    async fn results(&self, status: GameStatus) -> Result<Vec<GameResult>> {
        let request = ListRequest {
            filter: GameFilter {
                game_status: vec![status],
            },
            range: Range { all: true },
            sort: vec![SortSpec::desc("createdAt")],
        };

        let envelope: Envelope<Vec<ResultDto>> = self.post("/game/list-result", &request).await?;
        Ok(envelope
            .into_data("data")?
            .into_iter()
            .filter_map(ResultDto::into_result)
            .collect())
    }

    async fn bet_history(&self, user: &UserId) -> Result<Vec<BetGroup>> {
        let request = ListRequest {
            filter: UserFilter {
                user_id: user.clone(),
            },
            range: Range { all: true },
            sort: vec![SortSpec::desc("createdAt")],
        };

        let envelope: Envelope<Vec<BetGroupDto>> =
            self.post("/game/list-user-bet", &request).await?;
        Ok(envelope
            .into_data("data")?
            .into_iter()
            .map(BetGroup::from)
            .collect())
    }
}
