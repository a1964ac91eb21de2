use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::{JobRow, ProcessedJob};

const UPSERT_JOB: &str = r#"
    INSERT INTO jobs (id, payload)
    VALUES ($1, $2)
    ON CONFLICT (id) DO UPDATE
        SET payload = EXCLUDED.payload,
            updated_at = NOW()
"#;

/// Inserts the job, or replaces the stored copy with the same id.
pub async fn upsert_job(pool: &PgPool, job: &ProcessedJob) -> Result<(), AppError> {
    sqlx::query(UPSERT_JOB)
        .bind(job.id.to_string())
        .bind(Json(job))
        .execute(pool)
        .await?;
    Ok(())
}

/// Upserts a whole batch in one transaction.
pub async fn upsert_jobs(pool: &PgPool, jobs: &[ProcessedJob]) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for job in jobs {
        sqlx::query(UPSERT_JOB)
            .bind(job.id.to_string())
            .bind(Json(job))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    debug!("Stored {} jobs", jobs.len());
    Ok(())
}

/// Returns the stored job exactly as it was written.
pub async fn get_job(pool: &PgPool, id: &str) -> Result<Option<ProcessedJob>, AppError> {
    let row = sqlx::query_as::<_, JobRow>(
        "SELECT id, payload, created_at, updated_at FROM jobs WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| {
        debug!(
            "Loaded job {} (created {}, updated {})",
            row.id, row.created_at, row.updated_at
        );
        row.payload.0
    }))
}
