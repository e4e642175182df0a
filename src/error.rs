use thiserror::Error;

/// A programmer error in the use of an adapter.
///
/// Misuse is never recovered from. Configuration methods panic with the
/// message of this error as soon as the misuse is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Misuse {
    /// A configuration method was called after the adapter produced (or
    /// attempted to produce) its first element.
    #[error("`{adapter}::{operation}` must be called before iteration begins")]
    ReconfiguredAfterStart {
        /// Name of the adapter type.
        adapter: &'static str,
        /// Name of the configuration method.
        operation: &'static str,
    },
}
