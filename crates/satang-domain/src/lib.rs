//! satang-domain
//!
//! Pure domain models for the expense tracker (Transaction, Category,
//! report windows and summaries). No I/O, no storage. Only data types.

pub mod category;
pub mod common;
pub mod report;
pub mod style;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use report::*;
pub use transaction::*;
