/// Book service interface
pub mod book;
/// User service interface
pub mod user;
