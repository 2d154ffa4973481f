#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingScheme {
    #[default]
    Detailed,
    Compatibility,
}
