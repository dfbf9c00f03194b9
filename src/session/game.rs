//! Session: one board played from deal (or resume) to win.

use crate::board::Board;
use crate::cards::{AssetRef, CardCatalog, SlotIndex};
use crate::core::{ConfigError, GameConfig, GameRng, GridDimensions, GridSpec, Result};
use crate::deck::DeckBuilder;
use crate::events::{GameEvent, Presenter};
use crate::persistence::{KeyValueStore, PersistenceCodec, SaveKeys};
use crate::rules::{IgnoreReason, MatchResolver, Resolution, Selection, SelectionEngine, SelectionPhase, WinDetector};
use crate::schedule::{PendingTask, ScheduledTask, Scheduler};

/// How the current board came to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Dealt from the catalog.
    Fresh,
    /// Rebuilt from a save record.
    Resumed,
}

/// What a pick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First slot of the turn revealed.
    FirstPick(SlotIndex),
    /// Pair found. `won` is true if it was the last one.
    Matched {
        first: SlotIndex,
        second: SlotIndex,
        won: bool,
    },
    /// Pair differs; both slots flip back after the mismatch delay.
    Mismatched { first: SlotIndex, second: SlotIndex },
}

/// The game-state engine.
///
/// Owns the board and drives it from player picks and timer ticks. The
/// key-value store and presenter are injected at construction; the engine
/// reaches nothing else.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardCatalog, SlotIndex};
/// use memory_match::core::GameConfig;
/// use memory_match::events::EventLog;
/// use memory_match::persistence::MemoryStore;
/// use memory_match::rules::SelectionPhase;
/// use memory_match::session::MemoryGame;
///
/// let catalog = CardCatalog::from_entries([("A", "a.png"), ("B", "b.png")]);
/// let config = GameConfig::new(2, 2).with_seed(1);
///
/// let mut game = MemoryGame::start(config, catalog, MemoryStore::new(), EventLog::new()).unwrap();
/// assert_eq!(game.phase(), SelectionPhase::Locked);
///
/// game.tick(2.0);
/// assert_eq!(game.phase(), SelectionPhase::Open);
/// ```
pub struct MemoryGame<S: KeyValueStore, P: Presenter> {
    config: GameConfig,
    dimensions: GridDimensions,
    codec: PersistenceCodec,
    store: S,
    presenter: P,
    rng: GameRng,
    board: Board,
    origin: SessionOrigin,
    selection: SelectionEngine,
    resolver: MatchResolver,
    win: WinDetector,
    scheduler: Scheduler,
}

impl<S: KeyValueStore, P: Presenter> MemoryGame<S, P> {
    /// Start a session with the default save keys.
    ///
    /// Resumes the board saved in `store` if there is a valid one, otherwise
    /// deals a fresh board. A corrupt save is discarded. Fails only when the
    /// requested grid cannot be dealt from `catalog` or a delay is not a
    /// finite, non-negative number of seconds.
    pub fn start(config: GameConfig, catalog: CardCatalog, store: S, presenter: P) -> Result<Self> {
        Self::start_with_keys(config, catalog, SaveKeys::default(), store, presenter)
    }

    /// Start a session whose save record lives under `keys`.
    pub fn start_with_keys(
        config: GameConfig,
        catalog: CardCatalog,
        keys: SaveKeys,
        mut store: S,
        presenter: P,
    ) -> Result<Self> {
        config.validate()?;
        let spec = GridSpec::normalize(config.columns, config.rows, catalog.len())?;
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let codec = PersistenceCodec::with_keys(catalog, keys);

        let loaded = codec
            .load(&store)
            .and_then(|record| record.as_ref().map(Board::from_record).transpose());
        let resumed = match loaded {
            Ok(Some(board)) => {
                if board.is_complete() {
                    log::warn!("discarding save of an already solved board");
                    None
                } else {
                    Some(board)
                }
            }
            Ok(None) => None,
            Err(err) => {
                log::warn!("discarding corrupt save: {}", err);
                None
            }
        };

        let (board, origin) = match resumed {
            Some(board) => (board, SessionOrigin::Resumed),
            None => {
                if let Err(err) = codec.reset(&mut store) {
                    log::warn!("failed to clear save: {}", err);
                }
                let board = deal(&config, codec.catalog(), spec.dimensions, &mut rng)?;
                (board, SessionOrigin::Fresh)
            }
        };

        log::info!(
            "starting {:?} session on a {} board, {} of {} pairs found, score {}",
            origin,
            board.dimensions(),
            board.match_count(),
            board.total_pairs(),
            board.score()
        );

        let mut game = Self {
            resolver: MatchResolver::new(config.scoring),
            config,
            dimensions: spec.dimensions,
            codec,
            store,
            presenter,
            rng,
            board,
            origin,
            selection: SelectionEngine::new(),
            win: WinDetector::new(),
            scheduler: Scheduler::new(),
        };

        if origin == SessionOrigin::Fresh {
            game.persist();
        }
        game.begin_intro();
        Ok(game)
    }

    /// Discard the current board and its save, and deal a new one.
    pub fn new_game(&mut self) -> std::result::Result<(), ConfigError> {
        self.purge();
        self.scheduler.clear();
        self.win.reset();

        self.board = deal(&self.config, self.codec.catalog(), self.dimensions, &mut self.rng)?;
        self.origin = SessionOrigin::Fresh;
        log::info!("new game on a {} board", self.dimensions);

        self.persist();
        self.begin_intro();
        Ok(())
    }

    /// Handle a player pick.
    pub fn pick(&mut self, index: SlotIndex) -> PickOutcome {
        match self.selection.pick(&mut self.board, index) {
            Selection::Ignored(reason) => {
                log::debug!("ignoring pick of {}: {:?}", index, reason);
                PickOutcome::Ignored(reason)
            }
            Selection::First(first) => {
                self.emit(GameEvent::SlotRevealed(first));
                PickOutcome::FirstPick(first)
            }
            Selection::Pair(first, second) => {
                self.emit(GameEvent::SlotRevealed(second));
                self.resolve_pair(first, second)
            }
        }
    }

    /// Advance the clock by `dt` and run every timer that came due.
    ///
    /// Returns the number of tasks run.
    pub fn tick(&mut self, dt: f64) -> usize {
        let due = self.scheduler.advance(dt);
        let fired = due.len();
        for task in due {
            self.run(task);
        }
        fired
    }

    fn resolve_pair(&mut self, first: SlotIndex, second: SlotIndex) -> PickOutcome {
        match self.resolver.resolve(&mut self.board, first, second) {
            Resolution::Matched { first, second } => {
                self.emit(GameEvent::SlotMatched(first));
                self.emit(GameEvent::SlotMatched(second));
                self.emit(GameEvent::ScoreChanged(self.board.score()));
                self.persist();

                let won = self.win.check(&self.board);
                if won {
                    log::info!("board solved with score {}", self.board.score());
                    self.emit(GameEvent::GameWon {
                        score: self.board.score(),
                    });
                    self.purge();
                } else {
                    self.selection.open();
                }
                PickOutcome::Matched { first, second, won }
            }
            Resolution::Mismatched { first, second } => {
                self.emit(GameEvent::Mismatch { first, second });
                self.emit(GameEvent::ScoreChanged(self.board.score()));
                self.persist();
                self.scheduler
                    .schedule(self.config.mismatch_delay, ScheduledTask::MismatchHide { first, second });
                PickOutcome::Mismatched { first, second }
            }
        }
    }

    fn begin_intro(&mut self) {
        self.selection.lock();
        self.emit(GameEvent::ScoreChanged(self.board.score()));
        for index in self.board.reveal_all() {
            self.emit(GameEvent::SlotRevealed(index));
        }
        self.scheduler
            .schedule(self.config.intro_reveal_delay, ScheduledTask::IntroHide);
    }

    fn run(&mut self, task: ScheduledTask) {
        log::debug!("timer fired at {:.2}: {:?}", self.scheduler.now(), task);
        let hidden = match task {
            ScheduledTask::IntroHide => self.board.hide_unmatched(),
            ScheduledTask::MismatchHide { first, second } => {
                self.resolver.flip_back(&mut self.board, first, second)
            }
        };
        for index in hidden {
            self.emit(GameEvent::SlotHidden(index));
        }
        self.selection.open();
    }

    fn persist(&mut self) {
        if let Err(err) = self.codec.save(&mut self.store, &self.board) {
            log::warn!("failed to save board: {}", err);
        }
    }

    fn purge(&mut self) {
        if let Err(err) = self.codec.reset(&mut self.store) {
            log::warn!("failed to clear save: {}", err);
        }
    }

    fn emit(&mut self, event: GameEvent) {
        event.dispatch(&mut self.presenter);
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    #[must_use]
    pub fn can_select(&self) -> bool {
        self.selection.can_select()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.board.score()
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.board.match_count()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.win.has_fired()
    }

    #[must_use]
    pub fn origin(&self) -> SessionOrigin {
        self.origin
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Face asset of the card at `index`.
    #[must_use]
    pub fn asset_at(&self, index: SlotIndex) -> Option<&AssetRef> {
        let slot = self.board.slot(index)?;
        self.codec.catalog().asset(slot.card_type())
    }

    /// Timers that have not fired yet.
    pub fn pending_timers(&self) -> impl Iterator<Item = &PendingTask> {
        self.scheduler.pending()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Tear down the session, handing back the injected collaborators.
    pub fn into_parts(self) -> (S, P) {
        (self.store, self.presenter)
    }
}

fn deal(
    config: &GameConfig,
    catalog: &CardCatalog,
    dimensions: GridDimensions,
    rng: &mut GameRng,
) -> std::result::Result<Board, ConfigError> {
    let deck = DeckBuilder::new(catalog, config.deck_selection).deal(dimensions.total_pairs(), rng)?;
    Ok(Board::fresh(dimensions, &deck))
}
