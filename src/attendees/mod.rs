//! The attendee store: RSVP submissions kept in memory for the life of the
//! process.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

use crate::constants::{IN_MEMORY_RESPONSES_CLASS, RESPONSE_REPOSITORY_INTERFACE};
use crate::container::ServiceInterface;
use crate::registration::TypeCatalog;

/// One accepted RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub will_attend: bool,
    pub responded_at: DateTime<Utc>,
}

impl GuestResponse {
    pub fn new(name: String, email: String, phone: String, will_attend: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            will_attend,
            responded_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait ResponseRepository: Send + Sync {
    async fn add_response(&self, response: GuestResponse);

    /// Every response, in submission order.
    async fn responses(&self) -> Vec<GuestResponse>;

    async fn attendees(&self) -> Vec<GuestResponse> {
        self.responses()
            .await
            .into_iter()
            .filter(|r| r.will_attend)
            .collect()
    }
}

impl ServiceInterface for dyn ResponseRepository {
    const TYPE_NAME: &'static str = RESPONSE_REPOSITORY_INTERFACE;
}

/// Mutex-guarded list; concurrent submissions are serialized.
#[derive(Default)]
pub struct InMemoryResponseRepository {
    responses: Mutex<Vec<GuestResponse>>,
}

impl InMemoryResponseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GuestResponse>> {
        self.responses.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ResponseRepository for InMemoryResponseRepository {
    async fn add_response(&self, response: GuestResponse) {
        debug!("Stored response from {} with id {}", response.name, response.id);
        self.lock().push(response);
    }

    async fn responses(&self) -> Vec<GuestResponse> {
        self.lock().clone()
    }
}

pub fn in_memory_response_repository() -> Arc<dyn ResponseRepository> {
    Arc::new(InMemoryResponseRepository::new())
}

pub fn register_types(catalog: &mut TypeCatalog) {
    catalog.register_class::<dyn ResponseRepository, _>(IN_MEMORY_RESPONSES_CLASS, in_memory_response_repository);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(name: &str, will_attend: bool) -> GuestResponse {
        GuestResponse::new(
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
            "555-0100".to_string(),
            will_attend,
        )
    }

    #[tokio::test]
    async fn test_attendees_filters_declines() {
        let repo = InMemoryResponseRepository::new();
        repo.add_response(response("Alice", true)).await;
        repo.add_response(response("Bob", false)).await;
        repo.add_response(response("Carol", true)).await;

        assert_eq!(repo.responses().await.len(), 3);

        let names: Vec<String> = repo.attendees().await.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[tokio::test]
    async fn test_concurrent_submissions_are_all_kept() {
        let repo: Arc<dyn ResponseRepository> = in_memory_response_repository();

        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.add_response(response(&format!("Guest{}", i), i % 2 == 0)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.responses().await.len(), 32);
        assert_eq!(repo.attendees().await.len(), 16);
    }
}
