use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("{0} navigation already initialized for this page")]
    AlreadyInitialized(&'static str),

    #[error("Unknown fragment: {0}")]
    UnknownFragment(String),
}
