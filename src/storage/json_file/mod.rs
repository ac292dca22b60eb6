pub mod file;
pub mod store;

pub use file::JsonFileStore;
pub use store::RecordStore;
