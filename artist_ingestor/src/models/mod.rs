pub mod artist;
pub mod data_model;
pub mod index;
pub mod tour;

pub use artist::{ArtistId, ArtistRecord};
pub use data_model::{DataModel, TourData};
pub use index::{Listing, ResourceIndex};
pub use tour::{DateRecord, LocationRecord, RelationRecord};
