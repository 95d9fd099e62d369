//! The betting session: one active strategy, tab switching, shared slip.

use tracing::debug;

use crate::domain::strategy::{CrossStrategy, GridStrategy, OpenPlayStrategy, Strategy};
use crate::domain::BetSlip;

/// The three betting screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Jantri,
    OpenPlay,
    Cross,
}

/// Per-game betting session.
///
/// Owns one instance of each strategy and tracks which tab is active. Only
/// the active strategy contributes wagers; switching tabs resets the
/// outgoing strategy (the focus-loss contract), so the shared slip is
/// always exactly the active tab's output. Input events arrive serialized
/// from a single UI loop, so the session is plain single-threaded state.
#[derive(Debug)]
pub struct BetSession {
    tab: Tab,
    grid: GridStrategy,
    open_play: OpenPlayStrategy,
    cross: CrossStrategy,
}

impl BetSession {
    /// A fresh session starting on the jantri grid.
    pub fn new() -> Self {
        Self {
            tab: Tab::Jantri,
            grid: GridStrategy::new(),
            open_play: OpenPlayStrategy::new(),
            cross: CrossStrategy::new(),
        }
    }

    /// The active tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch tabs, resetting the outgoing strategy.
    ///
    /// Selecting the already-active tab is a no-op and keeps its state.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab == tab {
            return;
        }
        debug!(from = ?self.tab, to = ?tab, "switching betting tab");
        self.active_mut().reset();
        self.tab = tab;
    }

    /// The active strategy's slip.
    pub fn slip(&self) -> &BetSlip {
        self.active().slip()
    }

    /// Reset the active strategy (screen blur / draft discard).
    pub fn reset_active(&mut self) {
        self.active_mut().reset();
    }

    /// Grid input access; selects the jantri tab first when needed.
    pub fn grid_mut(&mut self) -> &mut GridStrategy {
        self.select_tab(Tab::Jantri);
        &mut self.grid
    }

    /// Open-play input access; selects its tab first when needed.
    pub fn open_play_mut(&mut self) -> &mut OpenPlayStrategy {
        self.select_tab(Tab::OpenPlay);
        &mut self.open_play
    }

    /// Cross input access; selects its tab first when needed.
    pub fn cross_mut(&mut self) -> &mut CrossStrategy {
        self.select_tab(Tab::Cross);
        &mut self.cross
    }

    fn active(&self) -> &dyn Strategy {
        match self.tab {
            Tab::Jantri => &self.grid,
            Tab::OpenPlay => &self.open_play,
            Tab::Cross => &self.cross,
        }
    }

    fn active_mut(&mut self) -> &mut dyn Strategy {
        match self.tab {
            Tab::Jantri => &mut self.grid,
            Tab::OpenPlay => &mut self.open_play,
            Tab::Cross => &mut self.cross,
        }
    }
}

impl Default for BetSession {
    fn default() -> Self {
        Self::new()
    }
}
