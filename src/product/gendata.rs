use rand::Rng;
use redis::ConnectionLike;
use serde_json::json;

use crate::configure::RedisInstance;
use crate::util::{list_len, rand_string, rpush};

use super::{ProductError, ProductErrorType};

// 生成样例product数据，用于演练 delete 场景
pub struct ProductSeeder {
    pub instance: RedisInstance,
    pub db: usize,
    pub key: String,
    pub count: usize,
}

impl ProductSeeder {
    pub fn exec(&self) -> Result<usize, ProductError> {
        let client = self
            .instance
            .to_redis_client_with_db(self.db)
            .map_err(|e| ProductError::from_err(e, ProductErrorType::ConnectionErr))?;
        let mut conn = client
            .get_dyn_connection()
            .map_err(|e| ProductError::from_err(e, ProductErrorType::ConnectionErr))?;
        seed_products(self.key.as_str(), self.count, conn.as_mut())
    }
}

// id 从 1 开始顺序分配，保证种子数据中总有可删除的已知id
pub fn seed_products(
    key: &str,
    count: usize,
    conn: &mut dyn ConnectionLike,
) -> Result<usize, ProductError> {
    let mut rng = rand::thread_rng();
    for i in 0..count {
        let product = json!({
            "id": i + 1,
            "name": rand_string(8),
            "price": rng.gen_range(1..10000),
        });
        let text = product.to_string();
        rpush(key, text.as_str(), conn)
            .map_err(|e| ProductError::from_err(e, ProductErrorType::RedisErr))?;
    }

    let len = list_len(key, conn)
        .map_err(|e| ProductError::from_err(e, ProductErrorType::RedisErr))?;
    log::info!("seeded {} product(s) into {}, list length is {}", count, key, len);
    Ok(len)
}
