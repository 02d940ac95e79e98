use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Lift;

/// Response containing a stored lift
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LiftResponse {
    pub id: i64,
    pub name: String,
    pub max: Decimal,
    pub created_at: Option<DateTime<Utc>>,
}

/// Request payload for creating a new lift
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLiftRequest {
    pub name: String,

    #[serde(default)]
    pub max: Decimal,

    /// Defaults to the time the request is handled
    pub created_at: Option<DateTime<Utc>>,
}

/// Request payload for updating an existing lift
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateLiftRequest {
    pub name: Option<String>,
    pub max: Option<Decimal>,
}

impl CreateLiftRequest {
    pub fn into_lift(self, now: DateTime<Utc>) -> Lift {
        Lift {
            id: 0,
            name: self.name,
            max: self.max,
            created_at: Some(self.created_at.unwrap_or(now)),
        }
    }
}

impl UpdateLiftRequest {
    /// Applies the present fields onto `existing`
    pub fn apply(self, existing: &mut Lift) {
        if let Some(name) = self.name {
            existing.name = name;
        }
        if let Some(max) = self.max {
            existing.max = max;
        }
    }
}

impl From<Lift> for LiftResponse {
    fn from(lift: Lift) -> Self {
        Self {
            id: lift.id,
            name: lift.name,
            max: lift.max,
            created_at: lift.created_at,
        }
    }
}
