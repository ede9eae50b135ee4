use std::fmt::Display;

/// 错误的类型
#[derive(Debug)]
pub enum ScanErrorType {
    ConnectionErr,
    ScanErr,
    DecodeErr,
    UnsupportedErr,

    /// 未知错误
    UnknowErr,
}

/// 扫描过程错误
#[derive(Debug)]
pub struct ScanError {
    /// 错误信息
    pub message: Option<String>,
    /// 错误原因（上一级的错误）
    pub cause: Option<String>,
    /// 错误类型
    pub error_type: ScanErrorType,
}

impl ScanError {
    /// 错误代码
    #[allow(dead_code)]
    fn code(&self) -> i32 {
        match self.error_type {
            ScanErrorType::UnknowErr => 9999,
            ScanErrorType::ConnectionErr => 1000,
            ScanErrorType::ScanErr => 1001,
            ScanErrorType::DecodeErr => 1002,
            ScanErrorType::UnsupportedErr => 1003,
        }
    }
    /// 从上级错误中创建应用错误
    pub(crate) fn from_err(err: impl ToString, error_type: ScanErrorType) -> Self {
        Self {
            message: None,
            cause: Some(err.to_string()),
            error_type,
        }
    }
    /// 从字符串创建应用错误
    pub(crate) fn from_str(msg: &str, error_type: ScanErrorType) -> Self {
        Self {
            message: Some(msg.to_string()),
            cause: None,
            error_type,
        }
    }
}

impl std::error::Error for ScanError {}

impl Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
