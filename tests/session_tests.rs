//! Session integration tests.
//!
//! These tests play whole turns through `MemoryGame`:
//! - Intro reveal and input gating
//! - Match and mismatch resolution with presenter events
//! - Win detection and save purge

use memory_match::cards::{CardCatalog, CardTypeId, SlotIndex};
use memory_match::core::GameConfig;
use memory_match::events::{EventLog, GameEvent};
use memory_match::persistence::{KeyValueStore, MemoryStore, PersistenceCodec};
use memory_match::rules::{IgnoreReason, SelectionPhase};
use memory_match::schedule::ScheduledTask;
use memory_match::session::{MemoryGame, PickOutcome};

type Game = MemoryGame<MemoryStore, EventLog>;

fn two_type_catalog() -> CardCatalog {
    CardCatalog::from_entries([("A", "a.png"), ("B", "b.png")])
}

fn start(config: GameConfig) -> Game {
    MemoryGame::start(config, two_type_catalog(), MemoryStore::new(), EventLog::new()).unwrap()
}

fn slots_of(game: &Game, card_type: u32) -> Vec<SlotIndex> {
    game.board()
        .slots()
        .filter(|s| s.card_type() == CardTypeId::new(card_type))
        .map(|s| s.index())
        .collect()
}

/// Start a 2x2 game and let the intro reveal finish.
fn playable_game(seed: u64) -> Game {
    let mut game = start(GameConfig::new(2, 2).with_seed(seed));
    game.tick(2.0);
    game.presenter_mut().drain();
    game
}

// =============================================================================
// Intro Reveal
// =============================================================================

/// The whole board is shown at start and input stays locked for the delay.
#[test]
fn test_intro_reveal_window() {
    let mut game = start(GameConfig::new(2, 2).with_seed(7));

    let revealed = game
        .presenter()
        .count(|e| matches!(e, GameEvent::SlotRevealed(_)));
    assert_eq!(revealed, 4);
    assert_eq!(game.phase(), SelectionPhase::Locked);
    assert!(!game.can_select());

    let pending: Vec<_> = game.pending_timers().map(|p| (p.due, p.task)).collect();
    assert_eq!(pending, vec![(2.0, ScheduledTask::IntroHide)]);

    assert_eq!(game.tick(1.5), 0);
    assert_eq!(
        game.pick(SlotIndex::new(0)),
        PickOutcome::Ignored(IgnoreReason::Locked)
    );

    assert_eq!(game.tick(0.5), 1);
    assert_eq!(game.phase(), SelectionPhase::Open);
    assert!(game.board().slots().all(|s| !s.is_revealed()));

    let hidden = game
        .presenter()
        .count(|e| matches!(e, GameEvent::SlotHidden(_)));
    assert_eq!(hidden, 4);
}

/// Custom intro delay is honoured.
#[test]
fn test_custom_intro_delay() {
    let mut game = start(GameConfig::new(2, 2).with_seed(1).with_intro_reveal_delay(0.5));

    game.tick(0.5);
    assert_eq!(game.phase(), SelectionPhase::Open);
}

// =============================================================================
// Full Game
// =============================================================================

/// 2x2 grid with catalog [A, B], solved without mistakes.
#[test]
fn test_two_by_two_scenario() {
    let mut game = playable_game(11);

    let a = slots_of(&game, 0);
    let b = slots_of(&game, 1);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);

    assert_eq!(game.pick(a[0]), PickOutcome::FirstPick(a[0]));
    assert_eq!(game.phase(), SelectionPhase::AwaitingSecondPick);
    assert_eq!(
        game.pick(a[1]),
        PickOutcome::Matched {
            first: a[0],
            second: a[1],
            won: false
        }
    );

    assert!(game.board().slot(a[0]).unwrap().is_matched());
    assert!(game.board().slot(a[1]).unwrap().is_matched());
    assert_eq!(game.score(), 1);
    assert_eq!(game.match_count(), 1);
    assert!(!game.is_won());
    assert_eq!(game.phase(), SelectionPhase::Open);
    assert!(game.store().has_key("card_layout"));

    game.pick(b[0]);
    assert_eq!(
        game.pick(b[1]),
        PickOutcome::Matched {
            first: b[0],
            second: b[1],
            won: true
        }
    );

    assert_eq!(game.score(), 2);
    assert_eq!(game.match_count(), 2);
    assert!(game.is_won());
    assert_eq!(game.phase(), SelectionPhase::Locked);

    let wins = game
        .presenter()
        .count(|e| matches!(e, GameEvent::GameWon { .. }));
    assert_eq!(wins, 1);

    let codec = PersistenceCodec::new(two_type_catalog());
    assert_eq!(codec.load(game.store()), Ok(None));
}

/// Picks after the win are ignored and the win does not fire twice.
#[test]
fn test_win_fires_once() {
    let mut game = playable_game(4);
    for card_type in 0..2 {
        let pair = slots_of(&game, card_type);
        game.pick(pair[0]);
        game.pick(pair[1]);
    }
    assert!(game.is_won());

    assert_eq!(
        game.pick(SlotIndex::new(0)),
        PickOutcome::Ignored(IgnoreReason::Locked)
    );
    game.tick(10.0);

    let (store, log) = game.into_parts();
    assert_eq!(log.count(|e| matches!(e, GameEvent::GameWon { .. })), 1);
    assert!(!store.has_key("card_layout"));
    assert!(!store.has_key("score"));
}

// =============================================================================
// Mismatch
// =============================================================================

/// Mismatched pair: revealed and penalised immediately, hidden after the delay.
#[test]
fn test_mismatch_scenario() {
    let mut game = playable_game(5);
    let a = slots_of(&game, 0)[0];
    let b = slots_of(&game, 1)[0];

    game.pick(a);
    assert_eq!(
        game.pick(b),
        PickOutcome::Mismatched { first: a, second: b }
    );

    assert!(game.board().slot(a).unwrap().is_revealed());
    assert!(game.board().slot(b).unwrap().is_revealed());
    assert_eq!(game.score(), -1);
    assert_eq!(game.store().get_int("score"), Some(-1));

    assert_eq!(
        game.presenter().events(),
        &[
            GameEvent::SlotRevealed(a),
            GameEvent::SlotRevealed(b),
            GameEvent::Mismatch { first: a, second: b },
            GameEvent::ScoreChanged(-1),
        ]
    );

    // Locked while the flip-back is pending.
    let other = slots_of(&game, 0)[1];
    assert_eq!(
        game.pick(other),
        PickOutcome::Ignored(IgnoreReason::Locked)
    );

    game.tick(0.5);

    for index in [a, b] {
        let slot = game.board().slot(index).unwrap();
        assert!(!slot.is_revealed());
        assert!(!slot.is_matched());
    }
    assert_eq!(game.phase(), SelectionPhase::Open);
    assert_eq!(game.score(), -1);
}

/// Score has no floor.
#[test]
fn test_score_goes_negative() {
    let mut game = playable_game(9);
    let a = slots_of(&game, 0)[0];
    let b = slots_of(&game, 1)[0];

    for _ in 0..3 {
        game.pick(a);
        game.pick(b);
        game.tick(0.5);
    }

    assert_eq!(game.score(), -3);
}

/// A locked pick touches neither the board nor the buffer.
#[test]
fn test_locked_pick_is_inert() {
    let mut game = playable_game(2);
    let a = slots_of(&game, 0)[0];
    let b = slots_of(&game, 1)[0];
    game.pick(a);
    game.pick(b);

    let before = game.board().clone();
    let c = slots_of(&game, 0)[1];
    game.pick(c);

    assert_eq!(game.board(), &before);
}

/// Re-picking the face-up first slot does not complete a pair.
#[test]
fn test_repick_is_ignored() {
    let mut game = playable_game(6);
    let a = slots_of(&game, 0)[0];

    game.pick(a);
    assert_eq!(
        game.pick(a),
        PickOutcome::Ignored(IgnoreReason::AlreadyRevealed)
    );
    assert_eq!(game.phase(), SelectionPhase::AwaitingSecondPick);
    assert_eq!(
        game.pick(SlotIndex::new(17)),
        PickOutcome::Ignored(IgnoreReason::OutOfRange)
    );
}

// =============================================================================
// Configuration
// =============================================================================

/// Odd grids are widened, and the widened grid must fit the catalog.
#[test]
fn test_odd_grid_is_widened() {
    let catalog = CardCatalog::from_entries((0..6).map(|i| (format!("T{i}"), format!("t{i}"))));
    let game = MemoryGame::start(
        GameConfig::new(3, 3).with_seed(1),
        catalog,
        MemoryStore::new(),
        EventLog::new(),
    )
    .unwrap();

    assert_eq!(game.board().dimensions().columns(), 4);
    assert_eq!(game.board().dimensions().rows(), 3);
    assert_eq!(game.board().len(), 12);
}

/// A zero-sized grid is a configuration error and nothing is saved.
#[test]
fn test_non_positive_grid_fails() {
    let mut store = MemoryStore::new();
    let result = MemoryGame::start(GameConfig::new(0, 2), two_type_catalog(), &mut store, EventLog::new());

    assert!(matches!(
        result,
        Err(memory_match::Error::Config(memory_match::ConfigError::NonPositiveDimensions { .. }))
    ));
    assert!(store.is_empty());
}
