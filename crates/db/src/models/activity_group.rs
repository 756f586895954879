//! Activity group entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use todolist_core::fields::FieldSet;
use todolist_core::resource::ActivityGroupField;
use todolist_core::types::{DbId, Timestamp};
use todolist_core::validation::ValidationError;

/// A row from the `activity_groups` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ActivityGroup {
    pub id: DbId,
    pub title: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
}

/// DTO for creating a new activity group.
#[derive(Debug, Clone)]
pub struct CreateActivityGroup {
    pub title: String,
    pub email: String,
}

impl TryFrom<FieldSet<ActivityGroupField>> for CreateActivityGroup {
    type Error = ValidationError;

    fn try_from(mut set: FieldSet<ActivityGroupField>) -> Result<Self, Self::Error> {
        Ok(Self {
            title: set.require_text(ActivityGroupField::Title)?,
            email: set.require_text(ActivityGroupField::Email)?,
        })
    }
}

/// DTO for a partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateActivityGroup {
    pub title: Option<String>,
    pub email: Option<String>,
}

impl From<FieldSet<ActivityGroupField>> for UpdateActivityGroup {
    fn from(mut set: FieldSet<ActivityGroupField>) -> Self {
        Self {
            title: set.take_text(ActivityGroupField::Title),
            email: set.take_text(ActivityGroupField::Email),
        }
    }
}
