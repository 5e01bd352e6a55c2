use std::sync::Arc;

use service::connection::Connection;
use service::records::RecordService;
use service::repository::RecordRepository;
use service::resources;

/// Service for one resource, shared by its handlers.
pub type Records = Arc<RecordService<dyn RecordRepository>>;

/// Everything handlers need, built once from the store connection.
#[derive(Clone)]
pub struct AppState {
    pub conn: Connection,
    pub authors: Records,
    pub movies: Records,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        let authors = Arc::new(RecordService::new(Arc::clone(&conn), resources::authors()));
        let movies = Arc::new(RecordService::new(Arc::clone(&conn), resources::movies()));
        Self { conn, authors, movies }
    }
}
