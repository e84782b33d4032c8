use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddExperienceRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub from: Option<NaiveDate>,

    #[serde(default)]
    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    #[serde(default)]
    pub description: Option<String>,
}
