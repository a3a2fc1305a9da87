use thiserror::Error;

/// Errors surfaced while constructing a population controller.
///
/// Runtime spawn and destination failures are deliberately not represented
/// here: the controller is a best-effort populator and absorbs them locally,
/// retrying on later ticks.
#[derive(Debug, Error)]
pub enum PopError {
    #[error("population configuration error: {0}")]
    Config(String),
}

pub type PopResult<T> = Result<T, PopError>;
