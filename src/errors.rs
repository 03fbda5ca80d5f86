use thiserror::Error;

use crate::arena::NodeId;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("cycle detected at node: {0:?}")]
    CycleDetected(NodeId),

    #[error("failed to fill child nodes of {node:?}: {source}")]
    Fill {
        node: NodeId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl TreeError {
    pub fn is_cycle(&self) -> bool {
        matches!(self, TreeError::CycleDetected(_))
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
