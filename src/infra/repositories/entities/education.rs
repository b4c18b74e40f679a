//! Education database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Education;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Education {
    fn from(model: Model) -> Self {
        Education {
            id: model.id,
            institution: model.institution,
            degree: model.degree,
            field_of_study: model.field_of_study,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Education> for ActiveModel {
    fn from(education: Education) -> Self {
        ActiveModel {
            id: Set(education.id),
            institution: Set(education.institution),
            degree: Set(education.degree),
            field_of_study: Set(education.field_of_study),
            start_date: Set(education.start_date),
            end_date: Set(education.end_date),
            description: Set(education.description),
            created_at: Set(education.created_at),
            updated_at: Set(education.updated_at),
        }
    }
}
