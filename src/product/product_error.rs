use std::fmt::Display;

/// 错误的类型
#[derive(Debug)]
pub enum ProductErrorType {
    ConnectionErr,
    RedisErr,
    JsonErr,

    /// 未知错误
    UnknowErr,
}

/// product 操作错误
#[derive(Debug)]
pub struct ProductError {
    /// 错误信息
    pub message: Option<String>,
    /// 错误原因（上一级的错误）
    pub cause: Option<String>,
    /// 错误类型
    pub error_type: ProductErrorType,
}

impl ProductError {
    /// 错误代码
    #[allow(dead_code)]
    fn code(&self) -> i32 {
        match self.error_type {
            ProductErrorType::UnknowErr => 9999,
            ProductErrorType::ConnectionErr => 2000,
            ProductErrorType::RedisErr => 2001,
            ProductErrorType::JsonErr => 2002,
        }
    }
    /// 从上级错误中创建应用错误
    pub(crate) fn from_err(err: impl ToString, error_type: ProductErrorType) -> Self {
        Self {
            message: None,
            cause: Some(err.to_string()),
            error_type,
        }
    }
    /// 从字符串创建应用错误
    #[allow(dead_code)]
    fn from_str(msg: &str, error_type: ProductErrorType) -> Self {
        Self {
            message: Some(msg.to_string()),
            cause: None,
            error_type,
        }
    }
}

impl std::error::Error for ProductError {}

impl Display for ProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
