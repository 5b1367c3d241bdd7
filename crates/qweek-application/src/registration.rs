//! Entry form use case: name validation, duplicate check and the hand-off
//! to the play screen.

use std::sync::Arc;

use reqwest::Url;

use qweek_core::QweekError;
use qweek_core::error::Result;
use qweek_core::participant::{ParticipantRepository, PlayerName};

/// Shown when the name pair already has a saved result.
pub const ALREADY_PLAYED_MESSAGE: &str = "Ya has participado en el juego.";

const FIRST_NAME_PARAM: &str = "firstName";
const LAST_NAME_PARAM: &str = "lastName";
const PLAY_BASE: &str = "qweek://play";

/// A player cleared to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub player: PlayerName,
    /// URL-encoded `firstName=..&lastName=..` for the play screen.
    pub query: String,
}

pub struct RegistrationService {
    repository: Arc<dyn ParticipantRepository>,
}

impl RegistrationService {
    pub fn new(repository: Arc<dyn ParticipantRepository>) -> Self {
        Self { repository }
    }

    /// Validates the entry form and checks for a previous participation.
    ///
    /// # Errors
    ///
    /// - `QweekError::Validation` if either name is empty after trimming
    /// - `QweekError::DuplicateParticipant` if a result exists for the pair
    /// - persistence errors from the store
    pub async fn check_and_register(&self, first_name: &str, last_name: &str) -> Result<Registration> {
        let player = PlayerName::new(first_name, last_name)?;

        if let Some(existing) = self
            .repository
            .find_by_name(player.first_name(), player.last_name())
            .await?
        {
            tracing::info!(
                "Rejected registration for {}: already played as {}",
                player.display_name(),
                existing.id
            );
            return Err(QweekError::duplicate(player.first_name(), player.last_name()));
        }

        tracing::info!("Registered {}", player.display_name());
        let query = play_query(&player)?;
        Ok(Registration { player, query })
    }
}

/// Encodes a player as the play screen query string.
pub fn play_query(player: &PlayerName) -> Result<String> {
    let mut url = base_url()?;
    url.query_pairs_mut()
        .append_pair(FIRST_NAME_PARAM, player.first_name())
        .append_pair(LAST_NAME_PARAM, player.last_name());
    Ok(url.query().unwrap_or_default().to_string())
}

/// Parses the play screen query string back into a player.
///
/// # Errors
///
/// Returns `QweekError::Validation` when either name is missing or blank,
/// which sends the player back to the entry form.
pub fn parse_play_query(query: &str) -> Result<PlayerName> {
    let mut url = base_url()?;
    url.set_query(Some(query.trim_start_matches('?')));

    let mut first_name = None;
    let mut last_name = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            FIRST_NAME_PARAM => first_name = Some(value.into_owned()),
            LAST_NAME_PARAM => last_name = Some(value.into_owned()),
            _ => {}
        }
    }

    PlayerName::new(
        first_name.as_deref().unwrap_or_default(),
        last_name.as_deref().unwrap_or_default(),
    )
}

fn base_url() -> Result<Url> {
    Url::parse(PLAY_BASE).map_err(|e| QweekError::internal(format!("Invalid play URL: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qweek_core::participant::NewParticipant;
    use qweek_infrastructure::InMemoryParticipantRepository;

    fn service() -> (RegistrationService, Arc<InMemoryParticipantRepository>) {
        let repository = Arc::new(InMemoryParticipantRepository::new());
        (RegistrationService::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn test_register_new_player() {
        let (service, _) = service();
        let registration = service.check_and_register(" Ana ", "Lopez").await.unwrap();

        assert_eq!(registration.player.display_name(), "Ana Lopez");
        assert_eq!(registration.query, "firstName=Ana&lastName=Lopez");
    }

    #[tokio::test]
    async fn test_register_requires_both_names() {
        let (service, _) = service();
        let err = service.check_and_register("Ana", "  ").await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Nombre y apellido son requeridos.");
    }

    #[tokio::test]
    async fn test_register_rejects_previous_participant() {
        let (service, repository) = service();
        repository
            .add(NewParticipant {
                first_name: "Ana".to_string(),
                last_name: "Lopez".to_string(),
                score: 4,
                total: 10,
                time_seconds: None,
            })
            .await
            .unwrap();

        let err = service.check_and_register("ana", "LOPEZ").await.unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_query_round_trip_with_special_characters() {
        let player = PlayerName::new("María José", "Pérez & Díaz").unwrap();
        let query = play_query(&player).unwrap();

        assert!(!query.contains(' '));
        assert!(!query.contains("& "));
        assert_eq!(parse_play_query(&query).unwrap(), player);
    }

    #[test]
    fn test_parse_query_missing_name_redirects() {
        assert!(parse_play_query("firstName=Ana").unwrap_err().is_validation());
        assert!(parse_play_query("").unwrap_err().is_validation());
        assert!(parse_play_query("?firstName=Ana&lastName=").unwrap_err().is_validation());

        let player = parse_play_query("?lastName=Lopez&firstName=Ana").unwrap();
        assert_eq!(player.first_name(), "Ana");
    }
}
