//! Integration tests for the betting session: tab exclusivity and the
//! shared slip contract.

use jantri::app::{BetSession, Tab};
use jantri::domain::Pair;
use rust_decimal_macros::dec;

#[test]
fn only_the_active_tab_contributes_wagers() {
    let mut session = BetSession::new();

    session
        .grid_mut()
        .set_amount(Pair::parse("07").unwrap(), "10");
    assert_eq!(session.slip().len(), 1);

    session.cross_mut().set_digits("12");
    session.cross_mut().set_amount("5");

    assert_eq!(session.tab(), Tab::Cross);
    assert_eq!(session.slip().len(), 4);
    assert_eq!(session.slip().total, dec!(20));
}

#[test]
fn tab_round_trip_loses_the_draft() {
    let mut session = BetSession::new();
    session.open_play_mut().set_chunk_digits("12");
    session.open_play_mut().set_chunk_amount("10");
    assert_eq!(session.slip().total, dec!(10));

    session.select_tab(Tab::Jantri);
    session.select_tab(Tab::OpenPlay);

    // Generation state is a draft cart: leaving the screen discards it
    assert!(session.slip().is_empty());
}

#[test]
fn selecting_the_same_tab_twice_is_a_noop() {
    let mut session = BetSession::new();
    session.cross_mut().set_digits("123");
    session.cross_mut().set_amount("10");
    let before = session.slip().clone();

    session.select_tab(Tab::Cross);

    assert_eq!(session.slip(), &before);
}

#[test]
fn fresh_session_slip_is_empty_on_every_tab() {
    let mut session = BetSession::new();
    for tab in [Tab::Jantri, Tab::OpenPlay, Tab::Cross] {
        session.select_tab(tab);
        assert!(session.slip().is_empty());
        assert_eq!(session.slip().total, dec!(0));
    }
}
