use std::collections::BTreeMap;
use crate::metrics::enums::naming_scheme::NamingScheme;

#[derive(Debug, Clone)]
pub struct EmitterOptions {
    pub scheme: NamingScheme,
    pub lang: String,
    pub rewrite_tracker: BTreeMap<String, String>,
    pub use_category_as_tracker: bool,
    pub max_download_speed: u64,
    pub max_upload_speed: u64,
}
