pub mod number_format;
pub mod skeleton;

pub use number_format::*;
pub use skeleton::TableSkeleton;
