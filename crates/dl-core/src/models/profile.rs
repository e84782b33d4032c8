use crate::models::education::Education;
use crate::models::experience::Experience;
use crate::models::social_links::SocialLinks;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile aggregate - at most one per user, keyed by the owner's id.
///
/// The experience and education sequences are embedded and newest-first;
/// they are reached only through the owner's profile lookup, so cross-user
/// injection is structurally impossible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub status: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// An empty profile for `user_id`, ready for the first field submission.
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            status: None,
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            skills: Vec::new(),
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite-merge: only supplied fields replace existing values,
    /// absent fields keep their prior values. Not a full-document replace.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(status) = update.status {
            self.status = Some(status);
        }
        if let Some(company) = update.company {
            self.company = Some(company);
        }
        if let Some(website) = update.website {
            self.website = Some(website);
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(github_username) = update.github_username {
            self.github_username = Some(github_username);
        }
        if let Some(skills) = update.skills {
            self.skills = skills;
        }
        if let Some(social) = update.social {
            self.social = social;
        }
    }
}

/// The supplied subset of profile fields for a create-or-update call.
///
/// When any social link is supplied the link set is replaced as a whole;
/// when none are, the prior links are kept.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub status: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social: Option<SocialLinks>,
}

/// Split a comma-separated skills string, trimming whitespace and dropping
/// empty segments.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
