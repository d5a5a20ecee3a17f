pub mod unicorns;

pub use unicorns::*;

pub use unicorns::Entity as Unicorns;
