/// A single colour entry from a swatch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// The swatch’s name. Version 1 records carry no name.
    pub name: Option<String>,
    /// The colour as a hex string, for example `#FF8000`.
    pub color: String,
}
