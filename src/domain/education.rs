//! Education entries: the resource served under `/education`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// A school, university or course attended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "University of Tartu")]
    pub institution: String,
    #[schema(example = "BSc")]
    pub degree: String,
    #[schema(example = "Computer Science")]
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    /// `None` while still ongoing
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to record a new education entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewEducation {
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Partial update. The outer `None` leaves a field untouched; for nullable
/// fields `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationChanges {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<Option<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
    pub description: Option<Option<String>>,
}

impl EducationChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Education {
    /// Build a fresh entry with a new id.
    ///
    /// # Errors
    /// Rejects an `end_date` earlier than `start_date`.
    pub fn new(input: NewEducation) -> AppResult<Self> {
        check_period(input.start_date, input.end_date)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            institution: input.institution,
            degree: input.degree,
            field_of_study: input.field_of_study,
            start_date: input.start_date,
            end_date: input.end_date,
            description: input.description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge changes into this entry and re-check the period.
    pub fn apply(&mut self, changes: EducationChanges) -> AppResult<()> {
        let start_date = changes.start_date.unwrap_or(self.start_date);
        let end_date = changes.end_date.unwrap_or(self.end_date);
        check_period(start_date, end_date)?;

        if let Some(institution) = changes.institution {
            self.institution = institution;
        }
        if let Some(degree) = changes.degree {
            self.degree = degree;
        }
        if let Some(field_of_study) = changes.field_of_study {
            self.field_of_study = field_of_study;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.start_date = start_date;
        self.end_date = end_date;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// An entry cannot end before it starts.
pub fn check_period(start_date: NaiveDate, end_date: Option<NaiveDate>) -> AppResult<()> {
    match end_date {
        Some(end) if end < start_date => Err(AppError::invalid_field(
            "end_date",
            "end_date must not be earlier than start_date",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_education() -> NewEducation {
        NewEducation {
            institution: "University of Tartu".to_string(),
            degree: "BSc".to_string(),
            field_of_study: Some("Computer Science".to_string()),
            start_date: date(2015, 9, 1),
            end_date: Some(date(2018, 6, 15)),
            description: None,
        }
    }

    #[test]
    fn test_new_assigns_id_and_timestamps() {
        let education = Education::new(new_education()).unwrap();
        assert_eq!(education.created_at, education.updated_at);
        assert_eq!(education.end_date, Some(date(2018, 6, 15)));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut input = new_education();
        input.end_date = Some(date(2014, 1, 1));

        let err = Education::new(input).unwrap_err();
        assert_eq!(err.violations()[0].field, "end_date");
    }

    #[test]
    fn test_same_day_period_allowed() {
        assert!(check_period(date(2020, 1, 1), Some(date(2020, 1, 1))).is_ok());
        assert!(check_period(date(2020, 1, 1), None).is_ok());
    }

    #[test]
    fn test_apply_merges_changes() {
        let mut education = Education::new(new_education()).unwrap();
        education
            .apply(EducationChanges {
                degree: Some("MSc".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(education.degree, "MSc");
        assert_eq!(education.institution, "University of Tartu");
        assert!(education.updated_at >= education.created_at);
    }

    #[test]
    fn test_apply_clears_nullable_fields() {
        let mut education = Education::new(new_education()).unwrap();
        education
            .apply(EducationChanges {
                end_date: Some(None),
                field_of_study: Some(None),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(education.end_date, None);
        assert_eq!(education.field_of_study, None);
        assert_eq!(education.degree, "BSc");
    }

    #[test]
    fn test_apply_keeps_nullable_fields_when_absent() {
        let mut education = Education::new(new_education()).unwrap();
        education.apply(EducationChanges::default()).unwrap();

        assert_eq!(education.end_date, Some(date(2018, 6, 15)));
        assert_eq!(education.field_of_study.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_apply_checks_merged_period() {
        let mut education = Education::new(new_education()).unwrap();
        let result = education.apply(EducationChanges {
            start_date: Some(date(2019, 1, 1)),
            ..Default::default()
        });

        assert!(result.is_err());
        // Rejected changes leave the entry untouched
        assert_eq!(education.start_date, date(2015, 9, 1));
    }
}
