pub mod models;
pub mod session;
pub mod session_store;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use models::{Expense, ExpenseChanges, ExpenseId, ExpenseType, NewExpense};
pub use session::{current_timestamp, AuthUser, Session, SESSION_STORAGE_KEY};
pub use session_store::SessionStore;
