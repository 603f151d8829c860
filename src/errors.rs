use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use crate::api::constants::{ALLOW_ORIGIN_ANY, EXAMPLE_QUERY, SUPPORT_CONTACT};

#[derive(Debug, Clone)]
pub enum IpscopeError {
    Validation(String),
    /// 上游返回非 success 状态，携带上游的 message（可能为空）
    UpstreamRejection(Option<String>),
    UpstreamFailure(String),
    MethodNotAllowed(String),
    Config(String),
}

/// 统一的 JSON 错误响应体
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<String>,
}

impl IpscopeError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            IpscopeError::Validation(_) => "E001",
            IpscopeError::UpstreamRejection(_) => "E002",
            IpscopeError::UpstreamFailure(_) => "E003",
            IpscopeError::MethodNotAllowed(_) => "E004",
            IpscopeError::Config(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            IpscopeError::Validation(_) => "Invalid IP address format",
            IpscopeError::UpstreamRejection(_) => "IP lookup failed",
            IpscopeError::UpstreamFailure(_) => "Internal server error",
            IpscopeError::MethodNotAllowed(_) => "Method not allowed",
            IpscopeError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            IpscopeError::Validation(msg) => msg,
            IpscopeError::UpstreamRejection(msg) => msg
                .as_deref()
                .unwrap_or("The geolocation service could not resolve this address"),
            IpscopeError::UpstreamFailure(msg) => msg,
            IpscopeError::MethodNotAllowed(msg) => msg,
            IpscopeError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于启动失败时的终端输出）
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

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 构造返回给客户端的错误体
    pub fn body(&self) -> ErrorBody {
        let error = self.error_type().to_string();
        let message = Some(self.message().to_string());
        match self {
            IpscopeError::Validation(_) => ErrorBody {
                error,
                message,
                tip: Some("Use a dotted-quad IPv4 address such as 8.8.8.8".to_string()),
                example: Some(EXAMPLE_QUERY.to_string()),
                support: None,
            },
            IpscopeError::UpstreamRejection(_) => ErrorBody {
                error,
                message,
                tip: Some(
                    "Private, reserved and loopback addresses cannot be geolocated".to_string(),
                ),
                example: Some(EXAMPLE_QUERY.to_string()),
                support: None,
            },
            IpscopeError::UpstreamFailure(_) => ErrorBody {
                error,
                message,
                tip: Some("Please try again in a few moments".to_string()),
                example: None,
                support: Some(SUPPORT_CONTACT.to_string()),
            },
            IpscopeError::MethodNotAllowed(_) | IpscopeError::Config(_) => ErrorBody {
                error,
                message,
                tip: None,
                example: None,
                support: None,
            },
        }
    }
}

impl fmt::Display for IpscopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for IpscopeError {}

impl ResponseError for IpscopeError {
    fn status_code(&self) -> StatusCode {
        match self {
            IpscopeError::Validation(_) | IpscopeError::UpstreamRejection(_) => {
                StatusCode::BAD_REQUEST
            }
            IpscopeError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            IpscopeError::UpstreamFailure(_) | IpscopeError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ALLOW_ORIGIN_ANY)
            .json(self.body())
    }
}

// 便捷的构造函数
impl IpscopeError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        IpscopeError::Validation(msg.into())
    }

    pub fn upstream_rejection(msg: Option<String>) -> Self {
        IpscopeError::UpstreamRejection(msg.filter(|m| !m.is_empty()))
    }

    pub fn upstream_failure<T: Into<String>>(msg: T) -> Self {
        IpscopeError::UpstreamFailure(msg.into())
    }

    pub fn method_not_allowed<T: Into<String>>(msg: T) -> Self {
        IpscopeError::MethodNotAllowed(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        IpscopeError::Config(msg.into())
    }
}

impl From<ureq::Error> for IpscopeError {
    fn from(err: ureq::Error) -> Self {
        IpscopeError::UpstreamFailure(err.to_string())
    }
}

impl From<serde_json::Error> for IpscopeError {
    fn from(err: serde_json::Error) -> Self {
        IpscopeError::UpstreamFailure(err.to_string())
    }
}

impl From<config::ConfigError> for IpscopeError {
    fn from(err: config::ConfigError) -> Self {
        IpscopeError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IpscopeError>;
