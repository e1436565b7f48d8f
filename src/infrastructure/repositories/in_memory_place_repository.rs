use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::place::{Place, TeamId};
use crate::domain::repositories::{PlaceRepository, RepositoryError};

/// In-process implementation of PlaceRepository
///
/// Enforces the same rules as the PostgreSQL adapter: team scoping,
/// unique `(name, team_id)`, and version-checked replace. Data is lost
/// when the process exits.
#[derive(Default)]
pub struct InMemoryPlaceRepository {
    places: RwLock<HashMap<Uuid, Place>>,
}

impl InMemoryPlaceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_taken(places: &HashMap<Uuid, Place>, candidate: &Place) -> bool {
    places.values().any(|p| {
        p.id() != candidate.id() && p.team_id() == candidate.team_id() && p.name() == candidate.name()
    })
}

#[async_trait]
impl PlaceRepository for InMemoryPlaceRepository {
    async fn find_all(&self, team_id: &TeamId) -> Result<Vec<Place>, RepositoryError> {
        let places = self.places.read().await;
        let mut found: Vec<Place> = places
            .values()
            .filter(|p| p.team_id() == team_id)
            .cloned()
            .collect();
        // Byte order, matching `COLLATE "C"` in the Postgres adapter
        found.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(found)
    }

    async fn find_one(&self, team_id: &TeamId, id: Uuid) -> Result<Option<Place>, RepositoryError> {
        let places = self.places.read().await;
        Ok(places.get(&id).filter(|p| p.team_id() == team_id).cloned())
    }

    async fn insert(&self, place: &Place) -> Result<(), RepositoryError> {
        let mut places = self.places.write().await;
        if places.contains_key(&place.id()) || name_taken(&places, place) {
            return Err(RepositoryError::DuplicateKey);
        }
        places.insert(place.id(), place.clone());
        Ok(())
    }

    async fn replace(&self, place: &Place, expected_version: i64) -> Result<(), RepositoryError> {
        let mut places = self.places.write().await;

        let stored = places
            .get(&place.id())
            .filter(|p| p.team_id() == place.team_id())
            .ok_or(RepositoryError::NotFound)?;
        if stored.version() != expected_version {
            return Err(RepositoryError::VersionConflict);
        }
        if name_taken(&places, place) {
            return Err(RepositoryError::DuplicateKey);
        }

        places.insert(place.id(), place.clone());
        Ok(())
    }

    async fn delete(&self, team_id: &TeamId, id: Uuid) -> Result<(), RepositoryError> {
        let mut places = self.places.write().await;
        let owned = places.get(&id).is_some_and(|p| p.team_id() == team_id);
        if !owned {
            return Err(RepositoryError::NotFound);
        }
        places.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::place::PlaceName;
    use chrono::Utc;

    fn team(id: &str) -> TeamId {
        TeamId::new(id).unwrap()
    }

    fn new_place(team_id: &str, name: &str) -> Place {
        Place::new(team(team_id), PlaceName::new(name).unwrap(), Utc::now()).0
    }

    #[tokio::test]
    async fn insert_and_find() {
        let repo = InMemoryPlaceRepository::new();
        let deli = new_place("T1", "Deli");

        repo.insert(&deli).await.unwrap();

        let found = repo.find_one(&team("T1"), deli.id()).await.unwrap();
        assert_eq!(found, Some(deli));
    }

    #[tokio::test]
    async fn find_all_is_team_scoped_and_sorted() {
        let repo = InMemoryPlaceRepository::new();
        repo.insert(&new_place("T1", "Deli")).await.unwrap();
        repo.insert(&new_place("T1", "Cafe")).await.unwrap();
        repo.insert(&new_place("T2", "Bistro")).await.unwrap();

        let names: Vec<String> = repo
            .find_all(&team("T1"))
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        assert_eq!(names, vec!["Cafe".to_string(), "Deli".to_string()]);
    }

    #[tokio::test]
    async fn find_all_orders_by_bytes() {
        let repo = InMemoryPlaceRepository::new();
        repo.insert(&new_place("T1", "cafe")).await.unwrap();
        repo.insert(&new_place("T1", "Deli")).await.unwrap();
        repo.insert(&new_place("T1", "Bistro")).await.unwrap();

        let names: Vec<String> = repo
            .find_all(&team("T1"))
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();

        assert_eq!(names, vec!["Bistro", "Deli", "cafe"]);
    }

    #[tokio::test]
    async fn duplicate_name_in_team_is_rejected() {
        let repo = InMemoryPlaceRepository::new();
        repo.insert(&new_place("T1", "Deli")).await.unwrap();

        let result = repo.insert(&new_place("T1", "Deli")).await;
        assert!(matches!(result, Err(RepositoryError::DuplicateKey)));

        assert!(repo.insert(&new_place("T2", "Deli")).await.is_ok());
    }

    #[tokio::test]
    async fn other_team_cannot_see_place() {
        let repo = InMemoryPlaceRepository::new();
        let deli = new_place("T1", "Deli");
        repo.insert(&deli).await.unwrap();

        assert_eq!(repo.find_one(&team("T2"), deli.id()).await.unwrap(), None);
        assert!(matches!(
            repo.delete(&team("T2"), deli.id()).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn replace_checks_version() {
        let repo = InMemoryPlaceRepository::new();
        let deli = new_place("T1", "Deli");
        repo.insert(&deli).await.unwrap();

        let mut first = deli.clone();
        first.visit(Utc::now());
        repo.replace(&first, deli.version()).await.unwrap();

        let mut second = deli.clone();
        second.skip(Utc::now());
        let result = repo.replace(&second, deli.version()).await;
        assert!(matches!(result, Err(RepositoryError::VersionConflict)));

        let stored = repo.find_one(&team("T1"), deli.id()).await.unwrap().unwrap();
        assert_eq!(stored.visit_count(), 1);
        assert_eq!(stored.skip_count(), 0);
    }

    #[tokio::test]
    async fn replace_rejects_name_collision() {
        let repo = InMemoryPlaceRepository::new();
        repo.insert(&new_place("T1", "Deli")).await.unwrap();
        let cafe = new_place("T1", "Cafe");
        repo.insert(&cafe).await.unwrap();

        let mut renamed = cafe.clone();
        renamed.apply(crate::domain::place::PlaceUpdate {
            name: Some(PlaceName::new("Deli").unwrap()),
        });

        let result = repo.replace(&renamed, cafe.version()).await;
        assert!(matches!(result, Err(RepositoryError::DuplicateKey)));
    }

    #[tokio::test]
    async fn replace_missing_place_is_not_found() {
        let repo = InMemoryPlaceRepository::new();
        let missing = new_place("T1", "Nowhere");

        let result = repo.replace(&missing, 0).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_place() {
        let repo = InMemoryPlaceRepository::new();
        let deli = new_place("T1", "Deli");
        repo.insert(&deli).await.unwrap();

        repo.delete(&team("T1"), deli.id()).await.unwrap();

        assert!(repo.find_all(&team("T1")).await.unwrap().is_empty());
        assert!(matches!(
            repo.delete(&team("T1"), deli.id()).await,
            Err(RepositoryError::NotFound)
        ));
    }
}
