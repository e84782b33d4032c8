use crate::collection::Keyed;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A schooling entry embedded in a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Education {
    pub fn new(
        school: String,
        degree: String,
        field_of_study: String,
        from: NaiveDate,
        to: Option<NaiveDate>,
        current: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            school,
            degree,
            field_of_study,
            from,
            to: if current { None } else { to },
            current,
            description,
        }
    }
}

impl Keyed for Education {
    fn key(&self) -> Uuid {
        self.id
    }
}
