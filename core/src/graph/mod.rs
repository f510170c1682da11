pub mod builder;
pub mod curve;
pub mod filter;
pub mod frequency;
pub mod surface;

pub use builder::{GraphDataBuilder, SpanReport};
pub use curve::{footprint, CurvePoint, NOISE_FLOOR_DBM, POINTS_PER_SERIES};
pub use filter::select;
pub use frequency::snap_to_grid;
pub use surface::PlottingSurface;
