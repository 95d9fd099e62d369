//! Application layer: the betting session and the placement flow.

mod placement;
mod session;

pub use placement::{PlacementOutcome, PlacementService};
pub use session::{BetSession, Tab};
