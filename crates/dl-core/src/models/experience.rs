use crate::collection::Keyed;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A work-history entry embedded in a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Experience {
    pub fn new(
        title: String,
        company: String,
        location: Option<String>,
        from: NaiveDate,
        to: Option<NaiveDate>,
        current: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            company,
            location,
            from,
            // a current position has no end date
            to: if current { None } else { to },
            current,
            description,
        }
    }
}

impl Keyed for Experience {
    fn key(&self) -> Uuid {
        self.id
    }
}
