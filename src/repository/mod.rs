pub mod database;
pub mod mongo;
pub mod store;
