//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every mutation is a single
//! statement, committed before the method returns.

pub mod author_repo;
pub mod book_repo;
pub mod category_repo;

pub use author_repo::AuthorRepo;
pub use book_repo::BookRepo;
pub use category_repo::CategoryRepo;
