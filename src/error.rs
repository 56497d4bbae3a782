use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("search engine `{name}` is not available")]
    SearchEngineUnavailable { name: String },
    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: String, row: usize, col: usize },
    #[error("level has no player marker")]
    MissingPlayer,
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
