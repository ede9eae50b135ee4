use redis::ConnectionLike;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::configure::RedisInstance;
use crate::util::{del, lrange, rpush};

use super::{ProductError, ProductErrorType};

// list 元素反序列化目标，id 之外的字段原样透传
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Product {
    pub id: Value,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

#[derive(Debug, PartialEq)]
pub enum DeleteOutcome {
    Deleted { removed: usize },
    NotFound,
}

// 给定 redis instance、库号、list key 与目标id，执行删除
pub struct ProductDelete {
    pub instance: RedisInstance,
    pub db: usize,
    pub key: String,
    pub target_id: Value,
}

impl ProductDelete {
    pub fn exec(&self) -> Result<DeleteOutcome, ProductError> {
        let client = self
            .instance
            .to_redis_client_with_db(self.db)
            .map_err(|e| ProductError::from_err(e, ProductErrorType::ConnectionErr))?;
        let mut conn = client
            .get_dyn_connection()
            .map_err(|e| ProductError::from_err(e, ProductErrorType::ConnectionErr))?;
        delete_product_by_id(self.key.as_str(), &self.target_id, conn.as_mut())
    }
}

// 读全量 list -> 反序列化 -> 过滤目标id -> del 后按原顺序逐条回写
// del 与回写之间无事务，其他读取方可能观察到缺失或部分重建的list
pub fn delete_product_by_id(
    key: &str,
    target_id: &Value,
    conn: &mut dyn ConnectionLike,
) -> Result<DeleteOutcome, ProductError> {
    let elements = lrange(key, 0, -1, conn)
        .map_err(|e| ProductError::from_err(e, ProductErrorType::RedisErr))?;

    let mut products: Vec<Product> = Vec::with_capacity(elements.len());
    for element in &elements {
        let product = serde_json::from_str::<Product>(element.as_str())
            .map_err(|e| ProductError::from_err(e, ProductErrorType::JsonErr))?;
        products.push(product);
    }

    let updated_products = retain_products(products, target_id);
    if updated_products.len() == elements.len() {
        return Ok(DeleteOutcome::NotFound);
    }
    let removed = elements.len() - updated_products.len();

    del(key, conn).map_err(|e| ProductError::from_err(e, ProductErrorType::RedisErr))?;
    for product in &updated_products {
        let text = serde_json::to_string(product)
            .map_err(|e| ProductError::from_err(e, ProductErrorType::JsonErr))?;
        rpush(key, text.as_str(), conn)
            .map_err(|e| ProductError::from_err(e, ProductErrorType::RedisErr))?;
    }

    log::info!(
        "list {} rewritten, {} element(s) removed, {} element(s) kept",
        key,
        removed,
        updated_products.len()
    );
    Ok(DeleteOutcome::Deleted { removed })
}

fn retain_products(products: Vec<Product>, target_id: &Value) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| product.id != *target_id)
        .collect()
}
