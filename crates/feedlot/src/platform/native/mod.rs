//! Native platform storage using the filesystem.

mod storage;

pub use storage::NativeStorage;
