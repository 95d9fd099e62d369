//! The placement flow: affordability pre-check plus a single submission.

use tracing::{info, warn};

use crate::domain::{Amount, BetSlip, GameId, UserId};
use crate::error::Result;
use crate::port::{BalanceSource, BetGateway, SubmissionReceipt};

/// Outcome of a placement attempt.
///
/// Insufficient balance is a structured signal, not an error: the caller
/// decides how to notify the player and whether to redirect to the wallet.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementOutcome {
    /// The platform accepted the wagers.
    Placed {
        receipt: SubmissionReceipt,
    },
    /// The slip costs more than the wallet holds; nothing was submitted.
    InsufficientBalance {
        balance: Amount,
        required: Amount,
    },
    /// The slip holds no wagers; nothing was submitted.
    EmptySlip,
}

/// Places a finished slip: one balance check, then at most one submission.
pub struct PlacementService<B, G> {
    balance: B,
    gateway: G,
}

impl<B: BalanceSource, G: BetGateway> PlacementService<B, G> {
    pub fn new(balance: B, gateway: G) -> Self {
        Self { balance, gateway }
    }

    /// Place the slip's wagers on a game.
    ///
    /// The balance is checked once, client-side; a short wallet never
    /// reaches the network. Submission happens exactly once and is not
    /// retried on failure - the error propagates and the caller surfaces
    /// it. The server receives only the wager list, never the total: it
    /// revalidates amounts itself.
    pub async fn place(
        &self,
        user: &UserId,
        game: &GameId,
        slip: &BetSlip,
    ) -> Result<PlacementOutcome> {
        if slip.is_empty() {
            return Ok(PlacementOutcome::EmptySlip);
        }

        let balance = self.balance.current_balance(user).await?;
        if balance < slip.total {
            warn!(
                %user,
                %balance,
                required = %slip.total,
                "placement blocked: insufficient balance"
            );
            return Ok(PlacementOutcome::InsufficientBalance {
                balance,
                required: slip.total,
            });
        }

        let receipt = self.gateway.submit(game, &slip.wagers).await?;
        info!(%game, wagers = slip.len(), total = %slip.total, "bets placed");

        Ok(PlacementOutcome::Placed { receipt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PairKind, Wager};
    use crate::error::{ApiError, Error};
    use crate::testkit::{slip_of, FixedBalance, RecordingGateway};
    use rust_decimal_macros::dec;

    fn service(
        balance: Amount,
    ) -> (PlacementService<FixedBalance, RecordingGateway>, RecordingGateway) {
        let gateway = RecordingGateway::accepting();
        (
            PlacementService::new(FixedBalance::new(balance), gateway.clone()),
            gateway,
        )
    }

    #[tokio::test]
    async fn sufficient_balance_submits_once() {
        let (service, gateway) = service(dec!(100));
        let slip = slip_of(&[("12", dec!(10), PairKind::Jodi), ("21", dec!(10), PairKind::Jodi)]);

        let outcome = service
            .place(&UserId::new("u1"), &GameId::new("g1"), &slip)
            .await
            .unwrap();

        assert!(matches!(outcome, PlacementOutcome::Placed { .. }));
        let submissions = gateway.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].0.as_str(), "g1");
        assert_eq!(submissions[0].1.len(), 2);
    }

    #[tokio::test]
    async fn exact_balance_is_enough() {
        let (service, gateway) = service(dec!(20));
        let slip = slip_of(&[("12", dec!(10), PairKind::Jodi), ("21", dec!(10), PairKind::Jodi)]);

        let outcome = service
            .place(&UserId::new("u1"), &GameId::new("g1"), &slip)
            .await
            .unwrap();

        assert!(matches!(outcome, PlacementOutcome::Placed { .. }));
        assert_eq!(gateway.submissions().len(), 1);
    }

    #[tokio::test]
    async fn short_balance_blocks_without_network_call() {
        let (service, gateway) = service(dec!(5));
        let slip = slip_of(&[("12", dec!(10), PairKind::Jodi)]);

        let outcome = service
            .place(&UserId::new("u1"), &GameId::new("g1"), &slip)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            PlacementOutcome::InsufficientBalance {
                balance: dec!(5),
                required: dec!(10),
            }
        );
        assert!(gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn empty_slip_never_reaches_the_gateway() {
        let (service, gateway) = service(dec!(100));

        let outcome = service
            .place(&UserId::new("u1"), &GameId::new("g1"), &BetSlip::empty())
            .await
            .unwrap();

        assert_eq!(outcome, PlacementOutcome::EmptySlip);
        assert!(gateway.submissions().is_empty());
    }

    #[tokio::test]
    async fn rejection_propagates_without_retry() {
        let gateway = RecordingGateway::rejecting("game closed");
        let service = PlacementService::new(FixedBalance::new(dec!(100)), gateway.clone());
        let slip = slip_of(&[("12", dec!(10), PairKind::Jodi)]);

        let err = service
            .place(&UserId::new("u1"), &GameId::new("g1"), &slip)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Api(ApiError::Rejected { ref message }) if message == "game closed"
        ));
        // One attempt recorded, no retry
        assert_eq!(gateway.submissions().len(), 1);
    }

    #[tokio::test]
    async fn submitted_wagers_match_the_slip() {
        let (service, gateway) = service(dec!(100));
        let slip = slip_of(&[("A3", dec!(15), PairKind::Harup)]);

        service
            .place(&UserId::new("u1"), &GameId::new("g1"), &slip)
            .await
            .unwrap();

        let (_, wagers): (GameId, Vec<Wager>) = gateway.submissions()[0].clone();
        assert_eq!(wagers, slip.wagers);
    }
}
