use crate::package::CompressionLevel;

/// Context passed throughout the application containing global configuration
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// Enable verbose output (snapshot size, skipped entries)
    pub verbose: bool,

    /// Compression applied to every archive entry
    pub level: CompressionLevel,
}

impl Context {
    pub fn new(verbose: bool, level: CompressionLevel) -> Self {
        Self { verbose, level }
    }
}
