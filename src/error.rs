use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise due to issues with the input graph or the
/// requested selection target.
#[derive(Debug, Clone)]
pub enum DispersionError {
    EmptyGraph,
    NodeOutOfRange(String),
    TargetOutOfRange(String),
    CyclicComponent(String),
    NotATree(String),
}

impl Error for DispersionError {}

impl Display for DispersionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            DispersionError::EmptyGraph => String::from("The graph provided has no nodes"),
            DispersionError::NodeOutOfRange(msg) =>
                format!("Node id out of range: {msg}"),
            DispersionError::TargetOutOfRange(msg) =>
                format!("Selection target out of range: {msg}"),
            DispersionError::CyclicComponent(msg) =>
                format!("Connected component is not a tree: {msg}"),
            DispersionError::NotATree(msg) =>
                format!("Graph is not a single connected tree: {msg}"),
        };
        write!(f, "{message}")
    }
}
