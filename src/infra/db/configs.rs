use async_trait::async_trait;

use crate::{
    application::repos::{ConfigsRepo, RepoError},
    domain::config::ConfigRecord,
};

use super::{PostgresRepositories, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct ConfigRow {
    key: String,
    value: Option<String>,
}

impl From<ConfigRow> for ConfigRecord {
    fn from(row: ConfigRow) -> Self {
        Self {
            key: row.key,
            value: row.value,
        }
    }
}

#[async_trait]
impl ConfigsRepo for PostgresRepositories {
    async fn find_by_key(&self, key: &str) -> Result<Option<ConfigRecord>, RepoError> {
        let row = sqlx::query_as::<_, ConfigRow>(
            r#"
            SELECT key, value
            FROM configs
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(ConfigRecord::from))
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<ConfigRecord, RepoError> {
        let mut tx = self.begin().await.map_err(map_sqlx_error)?;

        // Read-then-write, unlocked: concurrent upserts of one key
        // interleave and the last commit wins.
        let existing = sqlx::query_as::<_, ConfigRow>(
            r#"
            SELECT key, value
            FROM configs
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if existing.is_some() {
            sqlx::query(
                r#"
                UPDATE configs
                SET value = $2
                WHERE key = $1
                "#,
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        } else {
            sqlx::query(
                r#"
                INSERT INTO configs (key, value)
                VALUES ($1, $2)
                "#,
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(ConfigRecord {
            key: key.to_string(),
            value: Some(value.to_string()),
        })
    }
}
