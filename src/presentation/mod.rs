/// Book shapes and the book create/update body
pub mod book;
/// User shapes and the user create/update body
pub mod user;
