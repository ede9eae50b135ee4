mod random;
mod redis_util;
mod yaml_util;

pub use random::rand_string;
pub use redis_util::{del, list_len, lrange, rpush};
pub use redis_util::{RedisClient, RedisClientWithDB, RedisConnection};
pub use yaml_util::flash_struct_to_yaml_file;
pub use yaml_util::from_yaml_file_to_struct;
