use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot determine own location")]
    Unlocatable,

    #[error("malformed pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("no command entry for: {0}")]
    NoRule(String),

    #[error("empty command template")]
    EmptyTemplate,
}
