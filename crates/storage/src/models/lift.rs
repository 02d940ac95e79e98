use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{Result, StorageError};

/// A named lift with its current maximum.
///
/// An `id` of zero means the lift has not been persisted yet. The store
/// assigns the id on create and never changes it afterwards.
///
/// Required fields are declared with `#[validate(required)]` and checked by
/// [`Lift::check_required`] before anything is written. `max` is never
/// required: zero is a valid maximum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Lift {
    pub id: i64,
    pub name: String,
    pub max: Decimal,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Lift {
    /// Unpersisted lift stamped with the current time
    pub fn new(name: impl Into<String>, max: Decimal) -> Self {
        Self {
            id: 0,
            name: name.into(),
            max,
            created_at: Some(Utc::now()),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Fails with [`StorageError::MissingField`] naming every unset required field.
    pub fn check_required(&self) -> Result<()> {
        self.validate().map_err(StorageError::from)
    }

    /// Names of the required fields that are currently unset, sorted.
    pub fn missing_fields(&self) -> Vec<String> {
        match self.check_required() {
            Err(StorageError::MissingField(fields)) => fields,
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lift_is_unpersisted_and_complete() {
        let lift = Lift::new("squat", Decimal::from(60));
        assert_eq!(lift.id, 0);
        assert!(!lift.is_persisted());
        assert!(lift.created_at.is_some());
        assert!(lift.check_required().is_ok());
    }

    #[test]
    fn test_zero_max_is_not_missing() {
        let lift = Lift::new("bench", Decimal::ZERO);
        assert!(lift.missing_fields().is_empty());
    }

    #[test]
    fn test_unset_created_at_is_missing() {
        let lift = Lift {
            created_at: None,
            ..Lift::new("deadlift", Decimal::from(60))
        };

        assert_eq!(lift.missing_fields(), vec!["created_at".to_string()]);
        assert!(matches!(
            lift.check_required(),
            Err(StorageError::MissingField(fields)) if fields == ["created_at"]
        ));
    }

    #[test]
    fn test_empty_name_is_allowed() {
        let lift = Lift::new("", Decimal::from(10));
        assert!(lift.check_required().is_ok());
    }

    #[test]
    fn test_default_lift_is_zero_value() {
        let lift = Lift::default();
        assert!(!lift.is_persisted());
        assert_eq!(lift.max, Decimal::ZERO);
        assert_eq!(lift.missing_fields(), vec!["created_at".to_string()]);
    }
}
