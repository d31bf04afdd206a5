//! Transaction log backends.

pub mod file;
pub mod in_memory;

pub use file::FileTransactionLog;
pub use in_memory::InMemoryTransactionLog;
