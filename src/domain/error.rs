// Panel builder errors
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// Target reference ids are single letters A..Z.
    #[error("cannot assign a reference id to target #{index}: only {max} targets are supported")]
    RefIdsExhausted { index: usize, max: usize },
}
