use dl_core::{parse_skills, ProfileUpdate, SocialLinks};

use serde::Deserialize;

/// Create-or-update profile payload. Every field is optional; absent
/// fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpsertProfileRequest {
    pub status: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    /// Comma-separated, e.g. "go, rust".
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileRequest {
    pub fn into_update(self) -> ProfileUpdate {
        let social = SocialLinks {
            youtube: self.youtube,
            twitter: self.twitter,
            facebook: self.facebook,
            linkedin: self.linkedin,
            instagram: self.instagram,
        };

        ProfileUpdate {
            status: self.status,
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            github_username: self.github_username,
            skills: self.skills.as_deref().map(parse_skills),
            social: if social.is_empty() { None } else { Some(social) },
        }
    }
}
