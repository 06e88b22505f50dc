mod histogram;
mod summary;

pub use histogram::Histogram;
pub use summary::Summary;
