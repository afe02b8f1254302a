//! Observability module - request IDs and request logging.

mod request_logger;

pub use request_logger::RequestLogger;
