//! Play session use case.
//!
//! Wraps a `GameController` with the per-second clock task and the result
//! persistence that happens when the player leaves the last result screen.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use qweek_core::error::Result;
use qweek_core::game::{FinalSummary, GameController, GameState, RoundReview};
use qweek_core::matching::Answers;
use qweek_core::participant::{Participant, ParticipantRepository, PlayerName};
use qweek_core::question::QuestionBank;

pub const ALREADY_SAVED_MESSAGE: &str = "Resultados ya guardados.";
pub const SAVE_FAILED_MESSAGE: &str = "No se pudo guardar el resultado.";

/// What happened to the result when the game finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved(Participant),
    /// A record for the name pair already existed; nothing was written.
    AlreadySaved,
    /// The store failed; the message is safe to show to the player.
    Failed(String),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved(_))
    }

    /// Non-blocking notice for the player, if any.
    pub fn notice(&self) -> Option<&str> {
        match self {
            SaveStatus::Saved(_) => None,
            SaveStatus::AlreadySaved => Some(ALREADY_SAVED_MESSAGE),
            SaveStatus::Failed(message) => Some(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishOutcome {
    pub summary: FinalSummary,
    pub save: SaveStatus,
}

/// One player's game, shared with its clock task.
pub struct PlaySession {
    controller: Arc<Mutex<GameController>>,
    repository: Arc<dyn ParticipantRepository>,
    clock: Option<JoinHandle<()>>,
}

impl PlaySession {
    /// Starts a game and its clock. Must be called within a tokio runtime.
    pub fn start(
        player: PlayerName,
        bank: QuestionBank,
        repository: Arc<dyn ParticipantRepository>,
    ) -> Self {
        Self::with_controller(GameController::new(player, bank), repository)
    }

    /// Starts the clock over an existing controller.
    pub fn with_controller(
        controller: GameController,
        repository: Arc<dyn ParticipantRepository>,
    ) -> Self {
        let controller = Arc::new(Mutex::new(controller));
        let clock = spawn_clock(Arc::clone(&controller));
        Self {
            controller,
            repository,
            clock: Some(clock),
        }
    }

    /// Shared handle to the controller, for rendering.
    pub fn controller(&self) -> Arc<Mutex<GameController>> {
        Arc::clone(&self.controller)
    }

    pub async fn state(&self) -> GameState {
        self.controller.lock().await.state()
    }

    pub async fn elapsed_seconds(&self) -> u64 {
        self.controller.lock().await.elapsed_seconds()
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub async fn submit_round1(&self, answers: Answers) -> Result<u32> {
        self.controller.lock().await.submit_round1(answers)
    }

    pub async fn next(&self) -> Result<()> {
        self.controller.lock().await.next()
    }

    pub async fn submit_round2(&self, answers: Answers) -> Result<u32> {
        self.controller.lock().await.submit_round2(answers)
    }

    pub async fn round1_review(&self) -> Option<RoundReview> {
        self.controller.lock().await.round1_review()
    }

    pub async fn round2_review(&self) -> Option<RoundReview> {
        self.controller.lock().await.round2_review()
    }

    /// `Result2 -> Final`, saving the result first.
    ///
    /// Saving is guarded against duplicates. A failed or skipped save does not
    /// block the transition; it is logged and reported in the outcome.
    ///
    /// # Errors
    ///
    /// Returns `QweekError::InvalidTransition` outside `Result2`.
    pub async fn finish(&mut self) -> Result<FinishOutcome> {
        let mut controller = self.controller.lock().await;
        let pending = controller.pending_result()?;

        let save = self.save(&pending).await;
        let summary = controller.finish()?;
        drop(controller);

        self.stop_clock();
        tracing::info!(
            "Game finished for {}: {}/{} in {}",
            summary.player.display_name(),
            summary.score,
            summary.total,
            summary.formatted_time()
        );

        Ok(FinishOutcome { summary, save })
    }

    async fn save(&self, pending: &FinalSummary) -> SaveStatus {
        let player = &pending.player;
        match self
            .repository
            .find_by_name(player.first_name(), player.last_name())
            .await
        {
            Ok(Some(_)) => {
                tracing::warn!(
                    "Participant {} already exists. Not saving new score.",
                    player.display_name()
                );
                return SaveStatus::AlreadySaved;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Could not check for a previous result: {}", e);
                return SaveStatus::Failed(SAVE_FAILED_MESSAGE.to_string());
            }
        }

        match self.repository.add(pending.to_new_participant()).await {
            Ok(participant) => SaveStatus::Saved(participant),
            Err(e) => {
                tracing::warn!("Failed to save result for {}: {}", player.display_name(), e);
                SaveStatus::Failed(SAVE_FAILED_MESSAGE.to_string())
            }
        }
    }

    fn stop_clock(&mut self) {
        if let Some(handle) = self.clock.take() {
            handle.abort();
            tracing::debug!("Game clock stopped");
        }
    }
}

impl Drop for PlaySession {
    fn drop(&mut self) {
        self.stop_clock();
    }
}

fn spawn_clock(controller: Arc<Mutex<GameController>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let mut controller = controller.lock().await;
            controller.tick();
            if controller.state() == GameState::Final {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use qweek_core::participant::NewParticipant;
    use qweek_core::question::{Round1Item, Round2Item};
    use qweek_infrastructure::InMemoryParticipantRepository;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const R1: &[Round1Item] = &[
        Round1Item { id: "a", prompt: "A", quantity: 2 },
        Round1Item { id: "b", prompt: "B", quantity: 4 },
    ];

    const R2: &[Round2Item] = &[
        Round2Item { id: "x", prompt: "X", action_plan: "plan x" },
        Round2Item { id: "y", prompt: "Y", action_plan: "plan y" },
    ];

    fn controller(first: &str) -> GameController {
        GameController::with_rng(
            PlayerName::new(first, "Lopez").unwrap(),
            QuestionBank::new(R1, R2),
            &mut StdRng::seed_from_u64(3),
        )
    }

    async fn play_to_result2(session: &PlaySession) {
        session.submit_round1(Answers::new()).await.unwrap();
        session.next().await.unwrap();
        session.submit_round2(Answers::new()).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_counts_rounds_only() {
        let repository = Arc::new(InMemoryParticipantRepository::new());
        let session = PlaySession::with_controller(controller("Ana"), repository);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(session.elapsed_seconds().await, 3);

        session.submit_round1(Answers::new()).await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(session.elapsed_seconds().await, 3);
        assert!(session.is_clock_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_saves_and_stops_clock() {
        let repository = Arc::new(InMemoryParticipantRepository::new());
        let mut session = PlaySession::with_controller(controller("Ana"), repository.clone());
        play_to_result2(&session).await;

        let outcome = session.finish().await.unwrap();
        assert!(outcome.save.is_saved());
        assert_eq!(outcome.save.notice(), None);
        assert_eq!(outcome.summary.total, 4);
        assert_eq!(session.state().await, GameState::Final);
        assert!(!session.is_clock_running());

        let stored = repository.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].time_seconds, Some(outcome.summary.elapsed_seconds));
    }

    #[tokio::test]
    async fn test_finish_does_not_overwrite_existing_result() {
        let repository = Arc::new(InMemoryParticipantRepository::new());
        repository
            .add(NewParticipant {
                first_name: "ana".to_string(),
                last_name: "lopez".to_string(),
                score: 9,
                total: 10,
                time_seconds: None,
            })
            .await
            .unwrap();

        let mut session = PlaySession::with_controller(controller("Ana"), repository.clone());
        play_to_result2(&session).await;

        let outcome = session.finish().await.unwrap();
        assert_eq!(outcome.save, SaveStatus::AlreadySaved);
        assert_eq!(outcome.save.notice(), Some(ALREADY_SAVED_MESSAGE));
        assert_eq!(session.state().await, GameState::Final);
        assert_eq!(repository.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_finish_before_result2_is_rejected() {
        let repository = Arc::new(InMemoryParticipantRepository::new());
        let mut session = PlaySession::with_controller(controller("Ana"), repository.clone());

        assert!(session.finish().await.unwrap_err().is_invalid_transition());
        assert_eq!(session.state().await, GameState::Round1);
        assert!(repository.list().await.unwrap().is_empty());
        assert!(session.is_clock_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_clock() {
        let repository = Arc::new(InMemoryParticipantRepository::new());
        let session = PlaySession::with_controller(controller("Ana"), repository);
        let shared = session.controller();

        tokio::time::sleep(Duration::from_millis(1500)).await;
        drop(session);
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(shared.lock().await.elapsed_seconds(), 1);
    }
}
