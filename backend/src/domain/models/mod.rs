//! Domain models shared between services, storage, and the REST mappers.

pub mod assessment;
pub mod checkin;
pub mod pregnancy;
pub mod profile;
pub mod reminder;

pub use assessment::*;
pub use checkin::*;
pub use pregnancy::*;
pub use profile::*;
pub use reminder::*;
