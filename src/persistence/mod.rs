mod error;
mod in_memory;
mod json_file;
mod store;

pub use error::PersistenceError;
pub use in_memory::InMemoryPlayerStore;
pub use json_file::JsonFileStore;
pub(crate) use json_file::to_pretty_json;
pub use store::PlayerStore;
