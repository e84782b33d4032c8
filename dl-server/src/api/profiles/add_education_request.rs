use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddEducationRequest {
    #[serde(default)]
    pub school: String,

    #[serde(default)]
    pub degree: String,

    #[serde(default)]
    pub field_of_study: String,

    #[serde(default)]
    pub from: Option<NaiveDate>,

    #[serde(default)]
    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    #[serde(default)]
    pub description: Option<String>,
}
