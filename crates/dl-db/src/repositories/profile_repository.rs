use crate::Result as DbErrorResult;

use dl_core::Profile;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, profile: &Profile) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO profiles (
                  user_id, status, company, website, location, bio, github_username,
                  skills, social, experience, education, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(profile.user_id.to_string())
        .bind(&profile.status)
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.github_username)
        .bind(serde_json::to_string(&profile.skills)?)
        .bind(serde_json::to_string(&profile.social)?)
        .bind(serde_json::to_string(&profile.experience)?)
        .bind(serde_json::to_string(&profile.education)?)
        .bind(profile.created_at.timestamp())
        .bind(profile.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query(
            r#"
              SELECT user_id, status, company, website, location, bio, github_username,
                     skills, social, experience, education, created_at, updated_at
              FROM profiles
              WHERE user_id = ?
              "#,
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_profile(&r)).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Profile>> {
        let rows = sqlx::query(
            r#"
              SELECT user_id, status, company, website, location, bio, github_username,
                     skills, social, experience, education, created_at, updated_at
              FROM profiles
              ORDER BY created_at DESC, rowid DESC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_profile).collect()
    }

    /// Write the whole aggregate back, embedded collections included.
    pub async fn update(&self, profile: &Profile) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE profiles
              SET status = ?, company = ?, website = ?, location = ?, bio = ?,
                  github_username = ?, skills = ?, social = ?, experience = ?,
                  education = ?, updated_at = ?
              WHERE user_id = ?
              "#,
        )
        .bind(&profile.status)
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.github_username)
        .bind(serde_json::to_string(&profile.skills)?)
        .bind(serde_json::to_string(&profile.social)?)
        .bind(serde_json::to_string(&profile.experience)?)
        .bind(serde_json::to_string(&profile.education)?)
        .bind(profile.updated_at.timestamp())
        .bind(profile.user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_by_user(&self, user_id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM profiles WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn row_to_profile(row: &SqliteRow) -> DbErrorResult<Profile> {
    Ok(Profile {
        user_id: Uuid::parse_str(&row.get::<String, _>("user_id")).unwrap(),
        status: row.get("status"),
        company: row.get("company"),
        website: row.get("website"),
        location: row.get("location"),
        bio: row.get("bio"),
        github_username: row.get("github_username"),
        skills: serde_json::from_str(&row.get::<String, _>("skills"))?,
        social: serde_json::from_str(&row.get::<String, _>("social"))?,
        experience: serde_json::from_str(&row.get::<String, _>("experience"))?,
        education: serde_json::from_str(&row.get::<String, _>("education"))?,
        created_at: DateTime::from_timestamp(row.get("created_at"), 0).unwrap(),
        updated_at: DateTime::from_timestamp(row.get("updated_at"), 0).unwrap(),
    })
}
