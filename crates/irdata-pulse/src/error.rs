/// Errors that can occur while building captures from pulse listings.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    /// A listing token is not a valid microsecond duration.
    #[error("invalid pulse sample {token:?} (expected an optionally signed duration in µs)")]
    InvalidSample { token: String },

    /// A signed token names the wrong kind for its place in the alternation.
    #[error("pulse sample {token:?} at index {index} is out of order (expected a {expected})")]
    OutOfOrder {
        token: String,
        index: usize,
        expected: &'static str,
    },

    /// The listing holds no samples at all.
    #[error("pulse listing is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, PulseError>;
