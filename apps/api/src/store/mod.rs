// Durable job records (Postgres) and the latest-batch cache (Redis).

pub mod cache;
pub mod jobs;
