use rescue_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("map line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("map is missing the {0} directive")]
    MissingGlobal(&'static str),

    #[error("roster error: {0}")]
    Roster(String),

    #[error("invalid map graph: {0}")]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
