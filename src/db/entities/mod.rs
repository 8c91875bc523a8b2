pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::Entity as Artists;
pub use shows::Entity as Shows;
pub use venues::Entity as Venues;
