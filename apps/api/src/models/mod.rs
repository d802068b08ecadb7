// Value types shared by the formation engine, the directory, and the HTTP layer.
// Nothing in here performs I/O.

pub mod person;
pub mod project;
pub mod requirement;
