mod initdb;
mod migrate_and_serve;
mod serve;

pub use initdb::init_database;
pub use migrate_and_serve::migrate_and_serve;
pub use serve::serve;
