//! Mock port implementations with scripted responses.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Amount, GameId, UserId, Wager};
use crate::error::{ApiError, Result};
use crate::port::{BalanceSource, BetGateway, SubmissionReceipt};

/// A wallet that always reports the same balances.
#[derive(Debug, Clone)]
pub struct FixedBalance {
    current: Amount,
    winning: Amount,
}

impl FixedBalance {
    /// Same amount for both balances.
    pub fn new(current: Amount) -> Self {
        Self {
            current,
            winning: current,
        }
    }

    /// Distinct main and winning balances.
    pub fn with_winning(current: Amount, winning: Amount) -> Self {
        Self { current, winning }
    }
}

#[async_trait]
impl BalanceSource for FixedBalance {
    async fn current_balance(&self, _user: &UserId) -> Result<Amount> {
        Ok(self.current)
    }

    async fn winning_balance(&self, _user: &UserId) -> Result<Amount> {
        Ok(self.winning)
    }
}

/// A gateway that records every submission and answers per script.
///
/// Clones share the recording, so tests can hold one handle while the
/// service under test owns another.
#[derive(Clone)]
pub struct RecordingGateway {
    submissions: Arc<Mutex<Vec<(GameId, Vec<Wager>)>>>,
    rejection: Option<String>,
}

impl RecordingGateway {
    /// Accept every submission.
    pub fn accepting() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
            rejection: None,
        }
    }

    /// Reject every submission with the given platform message.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
            rejection: Some(message.into()),
        }
    }

    /// Everything submitted so far, in call order.
    pub fn submissions(&self) -> Vec<(GameId, Vec<Wager>)> {
        self.submissions.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl BetGateway for RecordingGateway {
    async fn submit(&self, game: &GameId, wagers: &[Wager]) -> Result<SubmissionReceipt> {
        self.submissions
            .lock()
            .expect("mutex poisoned")
            .push((game.clone(), wagers.to_vec()));

        match &self.rejection {
            Some(message) => Err(ApiError::Rejected {
                message: message.clone(),
            }
            .into()),
            None => Ok(SubmissionReceipt {
                bet_id: Some(format!("bet-{}", self.submissions().len())),
                message: Some("Bet placed successfully".into()),
            }),
        }
    }
}
