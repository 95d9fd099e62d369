//! Wire DTOs for the platform API.
//!
//! Every endpoint is a JSON POST. List endpoints take a shared request
//! envelope (`filter` / `range` / `sort`) and all responses arrive wrapped
//! in `{ success, data, stats?, message? }`. Field names are camelCase on
//! the wire; conversions into domain types live here so the client stays
//! free of parsing detail.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    BetGroup, BetOutcome, Game, GameId, GameResult, GameStatus, SettledBet, UserId, Wager,
};
use crate::error::{ApiError, Error};

/// Response wrapper every endpoint uses.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub stats: Option<WalletStats>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope: a `success: false` answer becomes
    /// [`ApiError::Rejected`] with the platform's message.
    pub fn into_data(self, field: &'static str) -> Result<T, Error> {
        if !self.success {
            return Err(ApiError::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
            }
            .into());
        }
        self.data
            .ok_or_else(|| ApiError::MissingData { field }.into())
    }
}

/// Aggregate totals on the wallet list response.
///
/// The platform spells the main balance field in all-lowercase.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletStats {
    #[serde(default)]
    pub totalbalance: Option<Decimal>,
    #[serde(default, rename = "totalWinningBalance")]
    pub total_winning_balance: Option<Decimal>,
}

/// Shared list request envelope.
#[derive(Debug, Serialize)]
pub struct ListRequest<F> {
    pub filter: F,
    pub range: Range,
    pub sort: Vec<SortSpec>,
}

#[derive(Debug, Serialize)]
pub struct Range {
    pub all: bool,
}

#[derive(Debug, Serialize)]
pub struct SortSpec {
    #[serde(rename = "orderBy")]
    pub order_by: &'static str,
    #[serde(rename = "orderDir")]
    pub order_dir: &'static str,
}

impl SortSpec {
    pub fn asc(order_by: &'static str) -> Self {
        Self {
            order_by,
            order_dir: "asc",
        }
    }

    pub fn desc(order_by: &'static str) -> Self {
        Self {
            order_by,
            order_dir: "desc",
        }
    }
}

/// Filter for the game and result list endpoints.
#[derive(Debug, Serialize)]
pub struct GameFilter {
    #[serde(rename = "gameStatus")]
    pub game_status: Vec<GameStatus>,
}

/// Filter for per-user list endpoints (wallet, bet history).
#[derive(Debug, Serialize)]
pub struct UserFilter {
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

/// Body of `/game/save-user-bet`.
#[derive(Debug, Serialize)]
pub struct SaveBetRequest<'a> {
    #[serde(rename = "gameId")]
    pub game_id: &'a GameId,
    pub bets: &'a [Wager],
}

/// Data section of a successful `/game/save-user-bet` answer.
#[derive(Debug, Deserialize)]
pub struct SaveBetData {
    #[serde(default, rename = "betId")]
    pub bet_id: Option<String>,
}

/// One game on the wire. Times are `HH:mm` wall-clock strings.
#[derive(Debug, Deserialize)]
pub struct GameDto {
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub name: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "resultTime")]
    pub result_time: String,
}

fn parse_wall_clock(field: &'static str, value: &str) -> Result<NaiveTime, Error> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|err| {
        ApiError::InvalidField {
            field,
            reason: err.to_string(),
        }
        .into()
    })
}

impl TryFrom<GameDto> for Game {
    type Error = Error;

    fn try_from(dto: GameDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: GameId::new(dto.game_id),
            name: dto.name,
            start_time: parse_wall_clock("startTime", &dto.start_time)?,
            end_time: parse_wall_clock("endTime", &dto.end_time)?,
            result_time: parse_wall_clock("resultTime", &dto.result_time)?,
        })
    }
}

/// One declared result on the wire.
#[derive(Debug, Deserialize)]
pub struct ResultDto {
    pub name: String,
    #[serde(default, rename = "gameResultFinal")]
    pub game_result_final: Option<ResultFinalDto>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ResultFinalDto {
    #[serde(rename = "resultNumber")]
    pub result_number: String,
}

impl ResultDto {
    /// Convert to a domain result; games without a declared number yet
    /// produce `None` and are dropped from the feed.
    pub fn into_result(self) -> Option<GameResult> {
        let final_result = self.game_result_final?;
        Some(GameResult {
            game_name: self.name,
            result: final_result.result_number,
            declared_at: self.created_at,
        })
    }
}

/// One bet-history group on the wire.
#[derive(Debug, Deserialize)]
pub struct BetGroupDto {
    pub game: GameRefDto,
    pub bets: Vec<BetDto>,
}

#[derive(Debug, Deserialize)]
pub struct GameRefDto {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct BetDto {
    #[serde(rename = "betStatus")]
    pub bet_status: BetOutcome,
    #[serde(default, rename = "winningAmount")]
    pub winning_amount: Option<Decimal>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<BetGroupDto> for BetGroup {
    fn from(dto: BetGroupDto) -> Self {
        Self {
            game_name: dto.game.name,
            bets: dto
                .bets
                .into_iter()
                .map(|bet| SettledBet {
                    outcome: bet.bet_status,
                    winning_amount: bet.winning_amount.unwrap_or(Decimal::ZERO),
                    placed_at: bet.created_at,
                })
                .collect(),
        }
    }
}
