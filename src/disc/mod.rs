pub mod bag;
pub mod catalog;
pub mod profile;

pub use self::bag::{Bag, BagEntry};
pub use self::catalog::{DiscCatalog, KnownDisc};
pub use self::profile::{DiscId, DiscProfile, DiscRecord, DiscType, FlightNumbers, Stability};
