use crate::Result as DbErrorResult;

use dl_core::Post;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, post: &Post) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO posts (
                  id, user_id, text, author_name, author_avatar,
                  likes, comments, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(post.id.to_string())
        .bind(post.user_id.to_string())
        .bind(&post.text)
        .bind(&post.author_name)
        .bind(&post.author_avatar)
        .bind(serde_json::to_string(&post.likes)?)
        .bind(serde_json::to_string(&post.comments)?)
        .bind(post.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Post>> {
        let row = sqlx::query(
            r#"
              SELECT id, user_id, text, author_name, author_avatar,
                     likes, comments, created_at
              FROM posts
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_post(&r)).transpose()
    }

    /// All posts, newest first. The rowid tiebreak keeps same-second
    /// inserts in reverse insertion order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Post>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, text, author_name, author_avatar,
                     likes, comments, created_at
              FROM posts
              ORDER BY created_at DESC, rowid DESC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_post).collect()
    }

    /// Write the whole aggregate back, likes and comments included.
    pub async fn update(&self, post: &Post) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE posts
              SET text = ?, author_name = ?, author_avatar = ?, likes = ?, comments = ?
              WHERE id = ?
              "#,
        )
        .bind(&post.text)
        .bind(&post.author_name)
        .bind(&post.author_avatar)
        .bind(serde_json::to_string(&post.likes)?)
        .bind(serde_json::to_string(&post.comments)?)
        .bind(post.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_by_user(&self, user_id: Uuid) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM posts WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn row_to_post(row: &SqliteRow) -> DbErrorResult<Post> {
    Ok(Post {
        id: Uuid::parse_str(&row.get::<String, _>("id")).unwrap(),
        user_id: Uuid::parse_str(&row.get::<String, _>("user_id")).unwrap(),
        text: row.get("text"),
        author_name: row.get("author_name"),
        author_avatar: row.get("author_avatar"),
        likes: serde_json::from_str(&row.get::<String, _>("likes"))?,
        comments: serde_json::from_str(&row.get::<String, _>("comments"))?,
        created_at: DateTime::from_timestamp(row.get("created_at"), 0).unwrap(),
    })
}
