use rescue_core::RescueError;
use rescue_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The scenario is unusable: unknown start or target node, no agents, or
    /// an automated roster entry asking for a human agent.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    #[error(transparent)]
    Core(#[from] RescueError),

    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
}

pub type SimResult<T> = Result<T, SimError>;
