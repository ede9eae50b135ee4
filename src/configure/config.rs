use crate::util::{flash_struct_to_yaml_file, from_yaml_file_to_struct};
use crate::util::{RedisClient, RedisClientWithDB};
use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use redis::cluster::ClusterClientBuilder;
use redis::RedisResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::{Mutex, RwLock};

lazy_static! {
    static ref GLOBAL_CONFIG: Mutex<Config> = Mutex::new(Config::default());
    static ref CONFIG_FILE_PATH: RwLock<String> = RwLock::new("".to_string());
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    Single,
    Cluster,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub struct RedisInstance {
    #[serde(default = "RedisInstance::urls_default")]
    pub urls: Vec<String>,
    #[serde(default = "RedisInstance::password_default")]
    pub password: String,
    #[serde(default = "RedisInstance::instance_type_default")]
    pub instance_type: InstanceType,
}

impl Default for RedisInstance {
    fn default() -> Self {
        Self {
            urls: vec!["redis://127.0.0.1:6379".to_string()],
            password: "".to_string(),
            instance_type: InstanceType::Single,
        }
    }
}

impl RedisInstance {
    pub fn urls_default() -> Vec<String> {
        vec!["redis://127.0.0.1:6379".to_string()]
    }
    pub fn password_default() -> String {
        "".to_string()
    }
    pub fn instance_type_default() -> InstanceType {
        InstanceType::Single
    }

    pub fn to_redis_client(&self) -> RedisResult<RedisClient> {
        return match self.instance_type {
            InstanceType::Single => {
                let cl = redis::Client::open(self.urls[0].as_str())?;
                Ok(RedisClient::Single(cl))
            }
            InstanceType::Cluster => {
                let mut cb = ClusterClientBuilder::new(self.urls.clone());
                if !self.password.is_empty() {
                    cb = cb.password(self.password.clone());
                }
                let cl = cb.open()?;
                Ok(RedisClient::Cluster(cl))
            }
        };
    }

    pub fn to_redis_client_with_db(&self, db: usize) -> RedisResult<RedisClientWithDB> {
        let client = self.to_redis_client()?;
        let rcwb = RedisClientWithDB { client, db };
        Ok(rcwb)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "Config::instance_default")]
    pub instance: RedisInstance,
    #[serde(default = "Config::db_default")]
    pub db: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instance: RedisInstance::default(),
            db: 0,
        }
    }
}

impl Config {
    fn instance_default() -> RedisInstance {
        RedisInstance::default()
    }
    fn db_default() -> usize {
        0
    }
}

pub fn generate_default_config(path: &str) -> Result<()> {
    let config = Config::default();
    flash_struct_to_yaml_file(&config, path)?;
    Ok(())
}

pub fn set_config_file_path(path: String) {
    let mut file_path = CONFIG_FILE_PATH
        .write()
        .expect("lock global config file path error!");
    *file_path = path;
}

pub fn get_config_file_path() -> String {
    CONFIG_FILE_PATH
        .read()
        .expect("lock global config file path error!")
        .clone()
}

pub fn get_config() -> Result<Config> {
    let locked_config = GLOBAL_CONFIG
        .lock()
        .map_err(|e| anyhow!("{}", e.to_string()))?;
    Ok(locked_config.clone())
}

pub fn set_config(config: &Config) {
    let mut global_config = GLOBAL_CONFIG.lock().expect("lock global config error!");
    *global_config = config.clone();
}

pub fn set_config_from_file(path: &str) {
    if !path.is_empty() {
        let config = from_yaml_file_to_struct::<Config>(path).expect("parse config file error!");
        set_config(&config);
        return;
    }
    // 未指定配置文件时优先加载当前目录的 config.yml
    if fs::metadata("config.yml").is_ok() {
        let config =
            from_yaml_file_to_struct::<Config>("config.yml").expect("parse config.yml error!");
        set_config(&config);
        return;
    }
    set_config(&Config::default());
}
