pub mod constants;
pub mod data;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod scale;
pub mod scene;
pub mod selection;
pub mod transition;

pub use constants::*;
pub use data::*;
pub use error::DataError;
pub use geometry::*;
pub use layout::*;
pub use scale::*;
pub use scene::*;
pub use selection::*;
pub use transition::*;
