use anyhow::{anyhow, Result};
use redis::{ConnectionLike, RedisResult, ToRedisArgs};

#[derive(Clone)]
pub enum RedisClient {
    Single(redis::Client),
    Cluster(redis::cluster::ClusterClient),
}

impl RedisClient {
    pub fn get_redis_connection(&self) -> RedisResult<RedisConnection> {
        return match self {
            RedisClient::Single(s) => {
                let conn = s.get_connection()?;
                Ok(RedisConnection::Single(conn))
            }
            RedisClient::Cluster(c) => {
                let conn = c.get_connection()?;
                Ok(RedisConnection::Cluster(conn))
            }
        };
    }
}

pub enum RedisConnection {
    Single(redis::Connection),
    Cluster(redis::cluster::ClusterConnection),
}

impl RedisConnection {
    pub fn get_dyn_connection(self) -> Box<dyn ConnectionLike> {
        let r: Box<dyn ConnectionLike> = match self {
            RedisConnection::Single(s) => Box::new(s),
            RedisConnection::Cluster(c) => Box::new(c),
        };
        r
    }
}

// 携带库号的client，get_dyn_connection 返回已选库的连接
#[derive(Clone)]
pub struct RedisClientWithDB {
    pub client: RedisClient,
    pub db: usize,
}

impl RedisClientWithDB {
    pub fn get_dyn_connection(&self) -> Result<Box<dyn ConnectionLike>> {
        let conn = self.client.get_redis_connection()?;
        let mut dyn_conn = conn.get_dyn_connection();
        match self.client {
            RedisClient::Single(_) => {
                let cmd_select = redis::cmd("select");
                dyn_conn.as_mut().req_command(cmd_select.clone().arg(self.db))?;
            }
            RedisClient::Cluster(_) => {
                // cluster 模式只有 db0
                if self.db != 0 {
                    return Err(anyhow!("cluster instance only supports db 0"));
                }
            }
        };
        Ok(dyn_conn)
    }
}

// List 长度
pub fn list_len<T>(key: T, conn: &mut dyn ConnectionLike) -> RedisResult<usize>
where
    T: ToRedisArgs,
{
    let l: usize = redis::cmd("llen").arg(key).query(conn)?;
    Ok(l)
}

//Lrange
pub fn lrange<T>(
    key: T,
    start: isize,
    end: isize,
    conn: &mut dyn ConnectionLike,
) -> RedisResult<Vec<String>>
where
    T: ToRedisArgs,
{
    let elements: Vec<String> = redis::cmd("lrange")
        .arg(key)
        .arg(start)
        .arg(end)
        .query(conn)?;
    Ok(elements)
}

// rpush 单元素追加，返回追加后的list长度
pub fn rpush<T>(key: T, element: T, conn: &mut dyn ConnectionLike) -> RedisResult<usize>
where
    T: ToRedisArgs,
{
    let len: usize = redis::cmd("rpush").arg(key).arg(element).query(conn)?;
    Ok(len)
}

pub fn del<T>(key: T, conn: &mut dyn ConnectionLike) -> RedisResult<usize>
where
    T: ToRedisArgs,
{
    let removed: usize = redis::cmd("del").arg(key).query(conn)?;
    Ok(removed)
}
