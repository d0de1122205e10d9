use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum IpinfodError {
    ClientInput(String),
    UpstreamUnavailable(String),
    UpstreamRejected(String),
    Serialization(String),
}

impl IpinfodError {
    /// Stable error code, included in error response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            IpinfodError::ClientInput(_) => "E001",
            IpinfodError::UpstreamUnavailable(_) => "E002",
            IpinfodError::UpstreamRejected(_) => "E003",
            IpinfodError::Serialization(_) => "E004",
        }
    }

    /// Human-readable error type name.
    pub fn error_type(&self) -> &'static str {
        match self {
            IpinfodError::ClientInput(_) => "Client Input Error",
            IpinfodError::UpstreamUnavailable(_) => "Upstream Unavailable",
            IpinfodError::UpstreamRejected(_) => "Upstream Rejected",
            IpinfodError::Serialization(_) => "Serialization Error",
        }
    }

    /// Error detail message.
    pub fn message(&self) -> &str {
        match self {
            IpinfodError::ClientInput(msg) => msg,
            IpinfodError::UpstreamUnavailable(msg) => msg,
            IpinfodError::UpstreamRejected(msg) => msg,
            IpinfodError::Serialization(msg) => msg,
        }
    }

    /// HTTP status the error surfaces as.
    ///
    /// Client-side problems (bad input, provider-level rejection) map to 400;
    /// anything that means the upstream could not deliver a usable answer
    /// maps to 502.
    pub fn http_status(&self) -> StatusCode {
        match self {
            IpinfodError::ClientInput(_) => StatusCode::BAD_REQUEST,
            IpinfodError::UpstreamRejected(_) => StatusCode::BAD_REQUEST,
            IpinfodError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            IpinfodError::Serialization(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for IpinfodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for IpinfodError {}

// 便捷的构造函数
impl IpinfodError {
    pub fn client_input<T: Into<String>>(msg: T) -> Self {
        IpinfodError::ClientInput(msg.into())
    }

    pub fn upstream_unavailable<T: Into<String>>(msg: T) -> Self {
        IpinfodError::UpstreamUnavailable(msg.into())
    }

    pub fn upstream_rejected<T: Into<String>>(msg: T) -> Self {
        IpinfodError::UpstreamRejected(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        IpinfodError::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for IpinfodError {
    fn from(err: serde_json::Error) -> Self {
        IpinfodError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IpinfodError>;
