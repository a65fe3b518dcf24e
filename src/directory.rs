//! Read-only card directory contract and the in-memory sample dataset that
//! stands in for a real card store.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::actions::types::{CardDetails, CardStatus, CardType};
use crate::errors::CardError;

/// Simulated backing-store latency per directory call.
const LOOKUP_LATENCY: Duration = Duration::from_millis(100);

/// Answers identity and ownership questions about users and their cards.
///
/// The backing store is an external concern; the query pipeline depends only
/// on this read-only contract. Calls are potentially latent I/O and must be
/// awaited; a dropped future at any of these await points is the caller's
/// cancellation path.
#[async_trait]
pub trait CardDirectory: Send + Sync {
    /// Does a user with this id exist?
    async fn user_exists(&self, user_id: &str) -> Result<bool, CardError>;

    /// Does this user own a card with this number?
    async fn card_exists(&self, user_id: &str, card_number: &str) -> Result<bool, CardError>;

    /// Full details of the card, or `None` if no such card exists for the
    /// user.
    async fn card_details(
        &self,
        user_id: &str,
        card_number: &str,
    ) -> Result<Option<CardDetails>, CardError>;
}

/// Deterministic in-memory card directory seeded with sample users.
///
/// Each user `User{n}` holds one card per (type, status) combination,
/// numbered `Card{n}{index}` with `index` counted from 1 in type-major,
/// status-minor enumeration order.
#[derive(Debug, Clone)]
pub struct SampleCardDirectory {
    user_cards: HashMap<String, HashMap<String, CardDetails>>,
}

impl SampleCardDirectory {
    pub fn new() -> Self {
        Self::with_users(3)
    }

    pub fn with_users(users: u32) -> Self {
        let mut user_cards = HashMap::new();
        for i in 1..=users {
            let mut cards = HashMap::new();
            let mut card_index = 1;
            for card_type in CardType::ALL {
                for card_status in CardStatus::ALL {
                    let card_number = format!("Card{i}{card_index}");
                    cards.insert(
                        card_number.clone(),
                        CardDetails {
                            card_number,
                            card_type,
                            card_status,
                            is_pin_set: card_index % 2 == 0,
                        },
                    );
                    card_index += 1;
                }
            }
            user_cards.insert(format!("User{i}"), cards);
        }
        Self { user_cards }
    }

    pub fn user_count(&self) -> usize {
        self.user_cards.len()
    }
}

impl Default for SampleCardDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CardDirectory for SampleCardDirectory {
    async fn user_exists(&self, user_id: &str) -> Result<bool, CardError> {
        tokio::time::sleep(LOOKUP_LATENCY).await;
        Ok(self.user_cards.contains_key(user_id))
    }

    async fn card_exists(&self, user_id: &str, card_number: &str) -> Result<bool, CardError> {
        tokio::time::sleep(LOOKUP_LATENCY).await;
        Ok(self
            .user_cards
            .get(user_id)
            .map(|cards| cards.contains_key(card_number))
            .unwrap_or(false))
    }

    async fn card_details(
        &self,
        user_id: &str,
        card_number: &str,
    ) -> Result<Option<CardDetails>, CardError> {
        tokio::time::sleep(LOOKUP_LATENCY).await;
        Ok(self
            .user_cards
            .get(user_id)
            .and_then(|cards| cards.get(card_number))
            .cloned())
    }
}
