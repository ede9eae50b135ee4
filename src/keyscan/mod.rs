mod scan_error;

pub use scan_error::{ScanError, ScanErrorType};

use crate::configure::{InstanceType, RedisInstance};
use redis::ConnectionLike;

// 给定 redis instance 与库号，遍历全部key
pub struct KeyScan {
    pub instance: RedisInstance,
    pub db: usize,
}

impl KeyScan {
    pub fn exec(&self) -> Result<Vec<String>, ScanError> {
        // cluster 模式不支持 scan
        if let InstanceType::Cluster = self.instance.instance_type {
            return Err(ScanError::from_str(
                "scan keys requires a single redis instance",
                ScanErrorType::UnsupportedErr,
            ));
        }

        let client = self
            .instance
            .to_redis_client_with_db(self.db)
            .map_err(|e| ScanError::from_err(e, ScanErrorType::ConnectionErr))?;
        let mut conn = client
            .get_dyn_connection()
            .map_err(|e| ScanError::from_err(e, ScanErrorType::ConnectionErr))?;

        let keys = scan_all_keys(conn.as_mut())?;
        log::info!("scan finished, {} keys in db {}", keys.len(), self.db);
        Ok(keys)
    }
}

// 游标遍历：cursor 回到 0 时结束，key 按返回顺序累积
pub fn scan_all_keys(conn: &mut dyn ConnectionLike) -> Result<Vec<String>, ScanError> {
    let mut keys: Vec<String> = vec![];
    let mut cursor: u64 = 0;
    loop {
        let (next_cursor, batch): (u64, Vec<Vec<u8>>) = redis::cmd("scan")
            .arg(cursor)
            .query(conn)
            .map_err(|e| ScanError::from_err(e, ScanErrorType::ScanErr))?;
        for raw_key in batch {
            let key = String::from_utf8(raw_key)
                .map_err(|e| ScanError::from_err(e, ScanErrorType::DecodeErr))?;
            keys.push(key);
        }
        cursor = next_cursor;
        if cursor == 0 {
            break;
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod test {
    use super::*;
    use redis::{ErrorKind, RedisError, RedisResult, Value};
    use std::collections::VecDeque;

    struct FakeConn {
        replies: VecDeque<Value>,
        requests: Vec<Vec<u8>>,
    }

    impl FakeConn {
        fn new(replies: Vec<Value>) -> Self {
            Self {
                replies: VecDeque::from(replies),
                requests: vec![],
            }
        }
    }

    impl ConnectionLike for FakeConn {
        fn req_packed_command(&mut self, cmd: &[u8]) -> RedisResult<Value> {
            self.requests.push(cmd.to_vec());
            match self.replies.pop_front() {
                Some(v) => Ok(v),
                None => Err(RedisError::from((ErrorKind::IoError, "no scripted reply"))),
            }
        }

        fn req_packed_commands(
            &mut self,
            _cmd: &[u8],
            _offset: usize,
            _count: usize,
        ) -> RedisResult<Vec<Value>> {
            Err(RedisError::from((ErrorKind::IoError, "not supported")))
        }

        fn get_db(&self) -> i64 {
            0
        }

        fn check_connection(&mut self) -> bool {
            true
        }

        fn is_open(&self) -> bool {
            true
        }
    }

    fn scan_page(cursor: &str, keys: Vec<&str>) -> Value {
        let elements = keys
            .into_iter()
            .map(|k| Value::Data(k.as_bytes().to_vec()))
            .collect();
        Value::Bulk(vec![
            Value::Data(cursor.as_bytes().to_vec()),
            Value::Bulk(elements),
        ])
    }

    //cargo test keyscan::test::test_scan_collects_all_pages -- --nocapture
    #[test]
    fn test_scan_collects_all_pages() {
        let mut conn = FakeConn::new(vec![
            scan_page("17", vec!["k1", "k2"]),
            scan_page("42", vec![]),
            scan_page("0", vec!["k3"]),
        ]);
        let keys = scan_all_keys(&mut conn).unwrap();
        assert_eq!(
            keys,
            vec!["k1".to_string(), "k2".to_string(), "k3".to_string()]
        );
        assert_eq!(conn.requests.len(), 3);
    }

    //cargo test keyscan::test::test_scan_empty_store -- --nocapture
    #[test]
    fn test_scan_empty_store() {
        let mut conn = FakeConn::new(vec![scan_page("0", vec![])]);
        let keys = scan_all_keys(&mut conn).unwrap();
        assert!(keys.is_empty());
        // 首轮游标即为0，只发起一次请求
        assert_eq!(conn.requests.len(), 1);
        assert_eq!(format!("{:?}", keys), "[]");
    }

    //cargo test keyscan::test::test_scan_invalid_utf8_key -- --nocapture
    #[test]
    fn test_scan_invalid_utf8_key() {
        let page = Value::Bulk(vec![
            Value::Data(b"0".to_vec()),
            Value::Bulk(vec![Value::Data(vec![0xff, 0xfe])]),
        ]);
        let mut conn = FakeConn::new(vec![page]);
        let err = scan_all_keys(&mut conn).unwrap_err();
        assert!(matches!(err.error_type, ScanErrorType::DecodeErr));
    }

    //cargo test keyscan::test::test_scan_rejects_cluster_instance -- --nocapture
    #[test]
    fn test_scan_rejects_cluster_instance() {
        let scan = KeyScan {
            instance: RedisInstance {
                urls: vec![
                    "redis://127.0.0.1:6379".to_string(),
                    "redis://127.0.0.1:6380".to_string(),
                ],
                password: "".to_string(),
                instance_type: InstanceType::Cluster,
            },
            db: 0,
        };
        let err = scan.exec().unwrap_err();
        assert!(matches!(err.error_type, ScanErrorType::UnsupportedErr));
    }
}
