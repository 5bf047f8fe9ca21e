//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod article_repo;
pub mod card_repo;
pub mod journal_repo;
pub mod order_repo;

pub use article_repo::ArticleRepo;
pub use card_repo::CardRepo;
pub use journal_repo::JournalRepo;
pub use order_repo::OrderRepo;
