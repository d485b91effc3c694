use thiserror::Error;

#[derive(Debug, Error)]
pub enum AstGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown mode {0} (expected \"hpp\" or \"cpp\")")]
    UnknownMode(String),

    #[error("Definition mode requires a header to include")]
    MissingHeader,

    #[error("Verifier error: {0}")]
    VerifierError(String),
}
