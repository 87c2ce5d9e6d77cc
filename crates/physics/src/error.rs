use terrain::TerrainError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("simulation world has not been built")]
    NotBuilt,
    #[error("force vector has {got} entries, agent expects {expected}")]
    ForceLength { expected: usize, got: usize },
    #[error("invalid simulator configuration: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Terrain(#[from] TerrainError),
}
