mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{SessionSnapshot, SessionStore};
