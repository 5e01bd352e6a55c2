/// Document entity CRUD against a live Postgres (skipped without `DATABASE_URL`)
pub mod document_tests;
