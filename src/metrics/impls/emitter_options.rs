use crate::config::structs::configuration::Configuration;
use crate::metrics::enums::naming_scheme::NamingScheme;
use crate::metrics::structs::emitter_options::EmitterOptions;
use crate::tracker::tracker::normalize_rewrite_table;

impl EmitterOptions {
    pub fn from_config(config: &Configuration) -> EmitterOptions
    {
        EmitterOptions {
            scheme: NamingScheme::from_compatibility_mode(config.compatibility_mode),
            lang: config.lang.clone(),
            rewrite_tracker: normalize_rewrite_table(&config.rewrite_tracker),
            use_category_as_tracker: config.use_category_as_tracker,
            max_download_speed: config.max_download_speed_bytes(),
            max_upload_speed: config.max_upload_speed_bytes(),
        }
    }
}
