//! Table driver tests.
//!
//! These tests drive a `Table` the way a presentation layer would:
//! - Random command streams checked against the turn invariants
//! - Renderer notification after each change
//! - Taps mapped to cards through the grid layout

use std::time::Duration;

use proptest::prelude::*;

use train_your_memory::cards::Card;
use train_your_memory::core::{GameConfig, GridConfig, SymbolId};
use train_your_memory::layout::GridLayout;
use train_your_memory::session::{FlipBack, Selection};
use train_your_memory::table::{SnapshotLog, Table};

#[derive(Clone, Debug)]
enum Command {
    Select(usize),
    Advance(u64),
    /// Apply the most recent mismatch's flip-back directly, even if it
    /// already ran.
    Replay,
    Reset,
}

fn command(card_count: usize) -> impl Strategy<Value = Command> {
    prop_oneof![
        8 => (0..card_count + 2).prop_map(Command::Select),
        3 => (0u64..1500).prop_map(Command::Advance),
        2 => Just(Command::Replay),
        1 => Just(Command::Reset),
    ]
}

fn table(pairs: usize, seed: u64) -> Table<SnapshotLog> {
    let symbols: Vec<String> = (0..pairs).map(|i| format!("s{i}")).collect();
    let config = GameConfig::new(symbols).with_seed(seed);
    Table::new(config, SnapshotLog::new()).unwrap()
}

proptest! {
    /// Turn integrity, match monotonicity and score consistency hold after
    /// every command of any command stream.
    #[test]
    fn test_invariants_hold(
        seed in any::<u64>(),
        commands in prop::collection::vec(command(8), 1..120),
    ) {
        let mut t = table(4, seed);
        let mut matched_before: Vec<bool> = vec![false; t.session().len()];
        let mut generation = t.session().generation();
        let mut last_mismatch: Option<FlipBack> = None;

        for cmd in commands {
            match cmd {
                Command::Select(index) => {
                    let result = t.select_card(index);
                    prop_assert_eq!(result.is_err(), index >= t.session().len());
                    if let Ok(Selection::Matched { first, second }) = result {
                        prop_assert_ne!(first, second);
                    }
                    if let Some(task) = result.ok().and_then(|s| s.flip_back()) {
                        last_mismatch = Some(task);
                    }
                }
                Command::Advance(ms) => {
                    let _ = t.advance(Duration::from_millis(ms));
                }
                Command::Replay => {
                    if let Some(task) = last_mismatch {
                        let _ = t.apply_flip_back(&task);
                    }
                }
                Command::Reset => t.reset(),
            }

            let session = t.session();
            if session.generation() != generation {
                generation = session.generation();
                matched_before = vec![false; session.len()];
                prop_assert_eq!(session.score(), 0);
                prop_assert!(session.cards().all(|c| !c.is_matched()));
            }

            // Face-up unmatched cards are exactly the pending card plus the
            // pairs still waiting for their flip-back.
            let face_up_unmatched = session
                .cards()
                .filter(|c| c.is_flipped() && !c.is_matched())
                .count();
            let pending = usize::from(session.pending().is_some());
            prop_assert_eq!(face_up_unmatched, pending + 2 * t.scheduler().pending());
            prop_assert_eq!(session.awaiting_flip_back(), t.scheduler().pending());
            if t.scheduler().pending() == 0 {
                prop_assert!(face_up_unmatched <= 2);
            }

            for (i, card) in session.cards().enumerate() {
                if matched_before[i] {
                    prop_assert!(card.is_matched());
                }
                if card.is_matched() {
                    prop_assert!(card.is_flipped());
                }
                matched_before[i] = card.is_matched();
            }

            let matched = session.cards().filter(|c| c.is_matched()).count();
            prop_assert_eq!(session.score() * 2, matched);
            prop_assert_eq!(session.is_complete(), session.score() == session.pairs());
        }
    }
}

/// Test that a player with perfect memory, seeing only revealed symbols,
/// finishes the game.
#[test]
fn test_play_to_completion() {
    let mut t = table(6, 77);
    let len = t.session().len();
    let mut seen: Vec<Option<SymbolId>> = vec![None; len];
    let mut turns = 0;

    while !t.session().is_complete() && turns < 100 {
        let selectable: Vec<usize> = (0..len)
            .filter(|&i| t.session().card(i).is_some_and(Card::is_selectable))
            .collect();
        let known_pair = selectable
            .iter()
            .flat_map(|&i| selectable.iter().map(move |&j| (i, j)))
            .find(|&(i, j)| i < j && seen[i].is_some() && seen[i] == seen[j]);

        if let Some((i, j)) = known_pair {
            let _ = t.select_card(i).unwrap();
            assert!(matches!(t.select_card(j).unwrap(), Selection::Matched { .. }));
        } else {
            let first = selectable.iter().copied().find(|&i| seen[i].is_none()).unwrap();
            let _ = t.select_card(first).unwrap();
            let symbol = t.snapshot().card(first).unwrap().symbol.cloned();
            seen[first] = symbol.clone();

            let second = selectable
                .iter()
                .copied()
                .find(|&i| i != first && seen[i].is_some() && seen[i] == symbol)
                .or_else(|| selectable.iter().copied().find(|&i| i != first && seen[i].is_none()))
                .unwrap();
            let _ = t.select_card(second).unwrap();
            seen[second] = t.snapshot().card(second).unwrap().symbol.cloned();
        }

        let _ = t.advance(Duration::from_secs(1));
        turns += 1;
    }

    assert!(t.session().is_complete());
    assert_eq!(t.session().score(), 6);
    assert!(t.observer().last().unwrap().complete);
}

/// Test that the renderer sees the mismatched pair face-up, then face-down.
#[test]
fn test_observer_sees_flip_back() {
    let mut t = table(3, 5);
    let len = t.session().len();
    let first = 0;
    let second = (1..len)
        .find(|&i| t.session().card(i).unwrap().symbol() != t.session().card(first).unwrap().symbol())
        .unwrap();

    let _ = t.select_card(first).unwrap();
    let selection = t.select_card(second).unwrap();
    assert!(matches!(selection, Selection::Mismatched(_)));

    let face_up = t.observer().last().unwrap();
    assert!(face_up.card(first).unwrap().flipped);
    assert!(face_up.card(second).unwrap().symbol.is_some());

    assert_eq!(t.advance(Duration::from_secs(1)), 1);
    let face_down = t.observer().last().unwrap();
    assert!(!face_down.card(first).unwrap().flipped);
    assert!(face_down.card(second).unwrap().symbol.is_none());
    assert_eq!(t.observer().len(), 3);
}

/// Test that a flip-back applied by the host is not fired again by the
/// scheduler after its card has been reselected.
#[test]
fn test_host_applied_flip_back_is_single_use() {
    let config = GameConfig::new(["a", "b"]).with_seed(8);
    let mut t = Table::new(config, SnapshotLog::new()).unwrap();
    let a = (0..4).find(|&i| t.session().card(i).unwrap().symbol().as_str() == "a").unwrap();
    let b = (0..4).find(|&i| t.session().card(i).unwrap().symbol().as_str() == "b").unwrap();

    let _ = t.select_card(a).unwrap();
    let task = t.select_card(b).unwrap().flip_back().unwrap();
    assert!(t.apply_flip_back(&task));
    assert_eq!(t.select_card(a).unwrap(), Selection::Pending { index: a });

    assert_eq!(t.advance(Duration::from_secs(1)), 0);
    assert!(t.session().card(a).unwrap().is_flipped());
    assert_eq!(t.session().pending(), Some(a));

    assert_eq!(t.select_card(a).unwrap(), Selection::Ignored);
    assert_eq!(t.session().score(), 0);
    let matched = t.session().cards().filter(|c| c.is_matched()).count();
    assert_eq!(matched, 0);
}

/// Test that a custom delay controls the flip-back window.
#[test]
fn test_custom_delay() {
    let config = GameConfig::new(["a", "b"])
        .with_seed(3)
        .with_delay(Duration::from_millis(250));
    let mut t = Table::new(config, SnapshotLog::new()).unwrap();

    let a = (0..4).find(|&i| t.session().card(i).unwrap().symbol().as_str() == "a").unwrap();
    let b = (0..4).find(|&i| t.session().card(i).unwrap().symbol().as_str() == "b").unwrap();
    let _ = t.select_card(a).unwrap();
    let _ = t.select_card(b).unwrap();

    assert_eq!(t.scheduler().next_due(), Some(Duration::from_millis(250)));
    assert_eq!(t.advance(Duration::from_millis(249)), 0);
    assert_eq!(t.advance(Duration::from_millis(1)), 1);
}

/// Test that taps on the laid-out grid reach the right cards.
#[test]
fn test_taps_through_layout() {
    let mut t = table(8, 21);
    let grid = GridLayout::compute(&GridConfig::default(), 375.0, 812.0, t.session().len()).unwrap();

    let target = 6;
    let cell = grid.cell(target).unwrap();
    let index = grid.hit_test(cell.x + 1.0, cell.y + 1.0).unwrap();
    assert_eq!(index, target);

    assert_eq!(t.select_card(index).unwrap(), Selection::Pending { index: target });

    // Taps in the gaps never reach the session
    assert_eq!(grid.hit_test(cell.x - 1.0, cell.y + 1.0), None);
}
