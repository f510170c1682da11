/// Common error type for band configuration and graph preparation.
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("inverted channel span: {first} MHz >= {second} MHz")]
    InvertedSpan { first: i32, second: i32 },
    #[error("unknown band: {0}")]
    UnknownBand(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
