//! Data structures shared with the HTTP handlers.

pub mod http_service_data;
