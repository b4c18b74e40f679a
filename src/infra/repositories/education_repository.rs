//! Education repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
};
use uuid::Uuid;

use super::entities::education::{self, ActiveModel, Entity as EducationEntity};
use crate::domain::Education;
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Education repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EducationRepository: Send + Sync {
    /// Find an entry by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Education>>;

    /// One page of entries, newest start date first, plus the total count
    async fn list(&self, params: PaginationParams) -> AppResult<(Vec<Education>, u64)>;

    /// Insert a new entry
    async fn create(&self, education: Education) -> AppResult<Education>;

    /// Overwrite an existing entry, `NotFound` if it is gone
    async fn update(&self, education: Education) -> AppResult<Education>;

    /// Delete by ID, `NotFound` if nothing was deleted
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed education repository
pub struct EducationStore {
    db: DatabaseConnection,
}

impl EducationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationRepository for EducationStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Education>> {
        let result = EducationEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Education::from))
    }

    async fn list(&self, params: PaginationParams) -> AppResult<(Vec<Education>, u64)> {
        let paginator = EducationEntity::find()
            .order_by_desc(education::Column::StartDate)
            .order_by_asc(education::Column::Id)
            .paginate(&self.db, params.limit());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page_index()).await?;

        Ok((models.into_iter().map(Education::from).collect(), total))
    }

    async fn create(&self, education: Education) -> AppResult<Education> {
        let model = ActiveModel::from(education).insert(&self.db).await?;
        Ok(Education::from(model))
    }

    async fn update(&self, education: Education) -> AppResult<Education> {
        match ActiveModel::from(education).update(&self.db).await {
            Ok(model) => Ok(Education::from(model)),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = EducationEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
