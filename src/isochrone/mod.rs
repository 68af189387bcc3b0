mod isochrone_error;
mod isochrone_ops;
mod isochrone_row;

pub use isochrone_error::IsochroneError;
pub use isochrone_ops::{make_isochrones, IsochroneOptions, ISOCHRONE_WORKERS};
pub use isochrone_row::{IsochroneRow, IsochroneTable};
