mod database;
mod myconfig;
mod redis;

pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::myconfig::Config;
pub use self::redis::{RedisConfig, RedisPool};
