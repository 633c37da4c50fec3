/// Command-line parsing and the decomposition runner
pub mod cli;
/// Defaults and format constants
pub mod configuration;
/// Subdomain file writing and reading
pub mod decomposition;
/// Error types and helpers
pub mod error;
/// Mask file loading
pub mod mask;
/// Size search progress display
pub mod progress;
