use crate::metrics::enums::naming_scheme::NamingScheme;

impl NamingScheme {
    pub fn from_compatibility_mode(compatibility_mode: bool) -> NamingScheme
    {
        match compatibility_mode {
            true => NamingScheme::Compatibility,
            false => NamingScheme::Detailed,
        }
    }

    pub fn namespace(&self) -> &'static str
    {
        match self {
            NamingScheme::Detailed => "pt",
            NamingScheme::Compatibility => "downloader",
        }
    }
}
