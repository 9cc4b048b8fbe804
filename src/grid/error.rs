#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
    #[error("location ({x},{y}) is already occupied")]
    LocationOccupied { x: u32, y: u32 },
    #[error("initial alive probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
