use std::sync::Arc;
use crate::collector::structs::collector_registry::CollectorRegistry;

#[derive(Debug, Default)]
pub struct HttpServiceData {
    pub registries: Vec<Arc<CollectorRegistry>>,
}
