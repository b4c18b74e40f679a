//! Education service - business rules for the education resource.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Education, EducationChanges, NewEducation};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

/// Education service trait for dependency injection.
#[async_trait]
pub trait EducationService: Send + Sync {
    /// One page of entries, newest start date first
    async fn list(&self, params: PaginationParams) -> AppResult<Paginated<Education>>;

    /// Get a single entry
    async fn get(&self, id: Uuid) -> AppResult<Education>;

    /// Record a new entry
    async fn create(&self, input: NewEducation) -> AppResult<Education>;

    /// Apply a partial update
    async fn update(&self, id: Uuid, changes: EducationChanges) -> AppResult<Education>;

    /// Remove an entry
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of EducationService using Unit of Work.
pub struct EducationManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EducationManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EducationService for EducationManager<U> {
    async fn list(&self, params: PaginationParams) -> AppResult<Paginated<Education>> {
        let (data, total) = self.uow.educations().list(params.clone()).await?;
        Ok(Paginated::new(data, &params, total))
    }

    async fn get(&self, id: Uuid) -> AppResult<Education> {
        self.uow.educations().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, input: NewEducation) -> AppResult<Education> {
        let education = Education::new(input)?;
        let created = self.uow.educations().create(education).await?;
        tracing::info!(education_id = %created.id, "Education created");
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: EducationChanges) -> AppResult<Education> {
        let repo = self.uow.educations();
        let mut education = repo.find_by_id(id).await?.ok_or_not_found()?;

        if changes.is_empty() {
            return Ok(education);
        }

        education.apply(changes)?;
        repo.update(education).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.uow.educations().delete(id).await?;
        tracing::info!(education_id = %id, "Education deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use crate::errors::AppError;
    use crate::infra::{
        EducationRepository, MockEducationRepository, MockUserRepository, UserRepository,
    };

    struct TestUnitOfWork {
        educations: Arc<MockEducationRepository>,
    }

    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            Arc::new(MockUserRepository::new())
        }

        fn educations(&self) -> Arc<dyn EducationRepository> {
            self.educations.clone()
        }
    }

    fn service(repo: MockEducationRepository) -> EducationManager<TestUnitOfWork> {
        EducationManager::new(Arc::new(TestUnitOfWork {
            educations: Arc::new(repo),
        }))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_education() -> NewEducation {
        NewEducation {
            institution: "Tallinn University of Technology".to_string(),
            degree: "MSc".to_string(),
            field_of_study: Some("Software Engineering".to_string()),
            start_date: date(2018, 9, 1),
            end_date: Some(date(2020, 6, 1)),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let id = Uuid::new_v4();
        let mut repo = MockEducationRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let result = service(repo).get(id).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_persists_entry() {
        let mut repo = MockEducationRepository::new();
        repo.expect_create()
            .times(1)
            .withf(|e| e.degree == "MSc")
            .returning(Ok);

        let created = service(repo).create(new_education()).await.unwrap();
        assert_eq!(created.institution, "Tallinn University of Technology");
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_period() {
        let mut repo = MockEducationRepository::new();
        repo.expect_create().never();

        let mut input = new_education();
        input.end_date = Some(date(2017, 1, 1));

        let result = service(repo).create(input).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_update_merges_and_saves() {
        let existing = Education::new(new_education()).unwrap();
        let id = existing.id;

        let mut repo = MockEducationRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update().times(1).returning(Ok);

        let updated = service(repo)
            .update(
                id,
                EducationChanges {
                    description: Some(Some("Thesis on type systems".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description.as_deref(), Some("Thesis on type systems"));
        assert_eq!(updated.degree, "MSc");
    }

    #[tokio::test]
    async fn test_empty_update_skips_write() {
        let existing = Education::new(new_education()).unwrap();
        let id = existing.id;

        let mut repo = MockEducationRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update().never();

        let unchanged = service(repo)
            .update(id, EducationChanges::default())
            .await
            .unwrap();
        assert_eq!(unchanged.id, id);
    }

    #[tokio::test]
    async fn test_list_builds_page_meta() {
        let entry = Education::new(new_education()).unwrap();

        let mut repo = MockEducationRepository::new();
        repo.expect_list()
            .with(eq(PaginationParams::new(2, 1)))
            .returning(move |_| Ok((vec![entry.clone()], 3)));

        let page = service(repo)
            .list(PaginationParams::new(2, 1))
            .await
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[tokio::test]
    async fn test_delete_propagates_not_found() {
        let mut repo = MockEducationRepository::new();
        repo.expect_delete().returning(|_| Err(AppError::NotFound));

        let result = service(repo).delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
