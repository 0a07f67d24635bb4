use beluga_graphlib::GraphError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("input graph contains a cycle: {unplaced} vertices cannot be layered")]
    CyclicInput { unplaced: usize },
}
