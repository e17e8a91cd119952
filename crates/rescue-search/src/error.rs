use thiserror::Error;

/// Why a planning call produced no action.
///
/// Every variant except `Resigned` carries the number of expansions that
/// were spent before giving up; the caller still charges them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("expansion limit {limit} reached after {expansions} expansions without a goal")]
    PlanningExhausted { limit: u64, expansions: u64 },

    #[error("no remaining target is reachable ({expansions} expansions)")]
    TargetUnreachable { expansions: u64 },

    #[error("action source resigned")]
    Resigned,
}

impl PlanError {
    /// Expansions consumed by the failed call.
    pub fn expansions(&self) -> u64 {
        match *self {
            PlanError::PlanningExhausted { expansions, .. } => expansions,
            PlanError::TargetUnreachable { expansions } => expansions,
            PlanError::Resigned => 0,
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
