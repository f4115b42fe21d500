use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The lexer distinguishes only success and failure; there is no
    /// structured diagnostic to carry.
    #[error("lexing failed")]
    LexFailed,
    #[error("invalid module metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl Error {
    /// Stable variant name, for drivers that report errors by name.
    pub fn name(&self) -> &'static str {
        match self {
            Error::LexFailed => "LexFailed",
            Error::Metadata { .. } => "Metadata",
        }
    }
}
