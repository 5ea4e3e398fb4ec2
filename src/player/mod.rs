mod record;

pub use record::{PlayerId, PlayerRecord};
