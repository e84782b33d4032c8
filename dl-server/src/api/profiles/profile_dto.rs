use dl_core::{Education, Experience, Profile, SocialLinks, User};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A profile joined with its owner's public identity, the shape clients
/// render from.
#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub user_id: Uuid,
    pub name: String,
    pub avatar: String,
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

impl ProfileDto {
    pub fn new(profile: Profile, owner: &User) -> Self {
        Self {
            user_id: profile.user_id,
            name: owner.name.clone(),
            avatar: owner.avatar.clone(),
            status: profile.status,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            github_username: profile.github_username,
            skills: profile.skills,
            social: profile.social,
            experience: profile.experience,
            education: profile.education,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
