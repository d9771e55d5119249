pub mod local;

pub use local::LocalFileStore;
