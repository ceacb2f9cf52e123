use std::fmt;

#[derive(Debug, Clone)]
pub enum WeblinksError {
    DatabaseConfig(String),
    StorageUnavailable(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
}

impl WeblinksError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            WeblinksError::DatabaseConfig(_) => "E001",
            WeblinksError::StorageUnavailable(_) => "E002",
            WeblinksError::DatabaseOperation(_) => "E003",
            WeblinksError::FileOperation(_) => "E004",
            WeblinksError::Validation(_) => "E005",
            WeblinksError::NotFound(_) => "E006",
            WeblinksError::Serialization(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            WeblinksError::DatabaseConfig(_) => "Database Configuration Error",
            WeblinksError::StorageUnavailable(_) => "Storage Unavailable",
            WeblinksError::DatabaseOperation(_) => "Database Operation Error",
            WeblinksError::FileOperation(_) => "File Operation Error",
            WeblinksError::Validation(_) => "Validation Error",
            WeblinksError::NotFound(_) => "Resource Not Found",
            WeblinksError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            WeblinksError::DatabaseConfig(msg)
            | WeblinksError::StorageUnavailable(msg)
            | WeblinksError::DatabaseOperation(msg)
            | WeblinksError::FileOperation(msg)
            | WeblinksError::Validation(msg)
            | WeblinksError::NotFound(msg)
            | WeblinksError::Serialization(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            WeblinksError::NotFound(_) => StatusCode::NOT_FOUND,
            WeblinksError::Validation(_) => StatusCode::BAD_REQUEST,
            WeblinksError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, WeblinksError::NotFound(_))
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for WeblinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for WeblinksError {}

// 便捷的构造函数
impl WeblinksError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        WeblinksError::DatabaseConfig(msg.into())
    }

    pub fn storage_unavailable<T: Into<String>>(msg: T) -> Self {
        WeblinksError::StorageUnavailable(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        WeblinksError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        WeblinksError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        WeblinksError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        WeblinksError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        WeblinksError::Serialization(msg.into())
    }
}

impl From<sea_orm::DbErr> for WeblinksError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                WeblinksError::StorageUnavailable(err.to_string())
            }
            other => WeblinksError::DatabaseOperation(other.to_string()),
        }
    }
}

impl From<std::io::Error> for WeblinksError {
    fn from(err: std::io::Error) -> Self {
        WeblinksError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for WeblinksError {
    fn from(err: serde_json::Error) -> Self {
        WeblinksError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for WeblinksError {
    fn from(err: csv::Error) -> Self {
        WeblinksError::Serialization(err.to_string())
    }
}

impl From<minijinja::Error> for WeblinksError {
    fn from(err: minijinja::Error) -> Self {
        WeblinksError::Serialization(format!("Template rendering failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, WeblinksError>;
