//! Game flow controller.

use rand::Rng;
use serde::Serialize;

use super::review::RoundReview;
use super::scoring::{score_round1, score_round2};
use super::state::GameState;
use super::summary::FinalSummary;
use crate::error::{QweekError, Result};
use crate::matching::{Answers, ConnectBoard, SelectBoard};
use crate::participant::PlayerName;
use crate::question::{QuestionBank, Round1Item, Round2Item, round1_options, shuffle};

/// Correct answers per round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoundScores {
    pub round1: u32,
    pub round2: u32,
}

impl RoundScores {
    pub fn combined(&self) -> u32 {
        self.round1 + self.round2
    }
}

/// Owns one player's game session.
///
/// The question order is shuffled once, at construction: round-1 prompts,
/// round-1 options, round-2 prompts and round-2 choices each get an
/// independent permutation so positions never reveal the pairing.
///
/// Every trigger checks the current state and fails with
/// `QweekError::InvalidTransition` without side effects when it does not apply.
#[derive(Debug, Clone)]
pub struct GameController {
    player: PlayerName,
    state: GameState,
    round1_prompts: Vec<Round1Item>,
    round1_options: Vec<String>,
    round2_prompts: Vec<Round2Item>,
    round2_choices: Vec<Round2Item>,
    round1_answers: Answers,
    round2_answers: Answers,
    scores: RoundScores,
    elapsed_seconds: u64,
}

impl GameController {
    /// Starts a session in `Round1` with a thread-local RNG.
    pub fn new(player: PlayerName, bank: QuestionBank) -> Self {
        Self::with_rng(player, bank, &mut rand::thread_rng())
    }

    /// Starts a session in `Round1`, shuffling with the given RNG.
    pub fn with_rng<R: Rng + ?Sized>(player: PlayerName, bank: QuestionBank, rng: &mut R) -> Self {
        let round1_prompts = shuffle(bank.round1(), rng);
        let round1_options = round1_options(&shuffle(bank.round1(), rng));
        let round2_prompts = shuffle(bank.round2(), rng);
        let round2_choices = shuffle(bank.round2(), rng);

        tracing::info!("Game session started for {}", player.display_name());

        Self {
            player,
            state: GameState::Round1,
            round1_prompts,
            round1_options,
            round2_prompts,
            round2_choices,
            round1_answers: Answers::new(),
            round2_answers: Answers::new(),
            scores: RoundScores::default(),
            elapsed_seconds: 0,
        }
    }

    pub fn player(&self) -> &PlayerName {
        &self.player
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn scores(&self) -> RoundScores {
        self.scores
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn round1_prompts(&self) -> &[Round1Item] {
        &self.round1_prompts
    }

    pub fn round1_options(&self) -> &[String] {
        &self.round1_options
    }

    pub fn round2_prompts(&self) -> &[Round2Item] {
        &self.round2_prompts
    }

    pub fn round2_choices(&self) -> &[Round2Item] {
        &self.round2_choices
    }

    pub fn total_questions(&self) -> u32 {
        (self.round1_prompts.len() + self.round2_prompts.len()) as u32
    }

    /// A fresh round-1 widget over this session's shuffled prompts and options.
    pub fn select_board(&self) -> SelectBoard {
        SelectBoard::new(
            self.round1_prompts.iter().map(|i| i.id),
            self.round1_options.clone(),
        )
    }

    /// A fresh round-2 widget over this session's shuffled columns.
    pub fn connect_board(&self) -> ConnectBoard {
        ConnectBoard::new(
            self.round2_prompts.iter().map(|i| i.id),
            self.round2_choices.iter().map(|i| i.id),
        )
    }

    /// Advances the elapsed-time counter by one second.
    ///
    /// Only counts while a round is being played; returns whether it did.
    pub fn tick(&mut self) -> bool {
        if self.state.is_timed() {
            self.elapsed_seconds += 1;
            true
        } else {
            false
        }
    }

    /// `Round1 -> Result1`: scores the chosen values against the quantities.
    pub fn submit_round1(&mut self, answers: Answers) -> Result<u32> {
        self.expect_state(GameState::Round1, "submit round 1")?;
        let score = score_round1(&self.round1_prompts, &answers);
        self.round1_answers = answers;
        self.scores.round1 = score;
        self.advance();
        Ok(score)
    }

    /// `Result1 -> Round2`.
    pub fn next(&mut self) -> Result<()> {
        self.expect_state(GameState::Result1, "start round 2")?;
        self.advance();
        Ok(())
    }

    /// `Round2 -> Result2`: scores the connections by id equality.
    pub fn submit_round2(&mut self, answers: Answers) -> Result<u32> {
        self.expect_state(GameState::Round2, "submit round 2")?;
        let score = score_round2(&self.round2_prompts, &answers);
        self.round2_answers = answers;
        self.scores.round2 = score;
        self.advance();
        Ok(score)
    }

    /// The result to persist, available once both rounds are scored.
    ///
    /// Does not change state; callers save this and then call `finish`.
    pub fn pending_result(&self) -> Result<FinalSummary> {
        self.expect_state(GameState::Result2, "finish")?;
        Ok(self.summary())
    }

    /// `Result2 -> Final`.
    pub fn finish(&mut self) -> Result<FinalSummary> {
        self.expect_state(GameState::Result2, "finish")?;
        self.advance();
        Ok(self.summary())
    }

    /// The final summary, once the session has reached `Final`.
    pub fn final_summary(&self) -> Option<FinalSummary> {
        (self.state == GameState::Final).then(|| self.summary())
    }

    /// Round-1 result rows, available from `Result1` onwards.
    pub fn round1_review(&self) -> Option<RoundReview> {
        (self.state != GameState::Round1)
            .then(|| RoundReview::round1(&self.round1_prompts, &self.round1_answers))
    }

    /// Round-2 result rows, available from `Result2` onwards.
    pub fn round2_review(&self) -> Option<RoundReview> {
        matches!(self.state, GameState::Result2 | GameState::Final).then(|| {
            RoundReview::round2(
                &self.round2_prompts,
                &self.round2_choices,
                &self.round2_answers,
            )
        })
    }

    fn summary(&self) -> FinalSummary {
        FinalSummary {
            player: self.player.clone(),
            score: self.scores.combined(),
            total: self.total_questions(),
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    fn expect_state(&self, expected: GameState, action: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(QweekError::invalid_transition(self.state, action))
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.state.successor() {
            tracing::debug!("Game state {} -> {}", self.state, next);
            self.state = next;
        }
    }
}
