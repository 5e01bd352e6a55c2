pub mod service;

pub use service::RecordService;
