pub mod author;
pub mod book;
pub mod ids;

pub use author::Author;
pub use book::Book;
pub use ids::{AuthorId, BookId};
