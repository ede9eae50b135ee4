mod config;

pub use config::{generate_default_config, get_config, get_config_file_path};
pub use config::{set_config, set_config_file_path, set_config_from_file};
pub use config::{Config, InstanceType, RedisInstance};
