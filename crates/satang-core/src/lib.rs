//! satang-core
//!
//! Business logic for the expense tracker: the persisted transaction store,
//! the CRUD service that fronts it, and the category-summary aggregation.
//! Depends on satang-domain. No terminal I/O, no direct filesystem layout
//! knowledge; persistence goes through the [`store::KeyValueStore`] trait.

pub mod error;
pub mod format;
pub mod store;
pub mod summary_service;
pub mod transaction_service;
pub mod validate;

pub use error::CoreError;
pub use store::{KeyValueStore, MemoryStore, TransactionStore, TRANSACTIONS_KEY};
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
