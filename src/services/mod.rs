pub mod awards;
pub mod datasets;
pub mod filter;
pub mod localization;
pub mod merge;
pub mod pagination;
pub mod providers;
pub mod rankings;
pub mod recommendations;
pub mod sort;

pub use datasets::{Catalog, Dataset};
pub use merge::WorkIndex;
