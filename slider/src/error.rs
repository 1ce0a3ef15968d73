use thiserror::Error;

/// Errors raised while configuring or mounting a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    /// Auto-play was enabled with a zero interval.
    #[error("auto-play interval must be greater than zero")]
    InvalidInterval,

    /// `mount` needs a tokio runtime to host the resize listener and timer.
    #[error("mounting a slider requires a running tokio runtime")]
    NoRuntime,
}
