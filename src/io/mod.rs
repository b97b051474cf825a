pub mod export;
pub mod ingest;
