pub type Result<T> = std::result::Result<T, CollectorError>;

/// Struct to represent IO errors.
#[derive(Debug)]
pub struct IoErrorStruct {
    /// The kind of IO error.
    error_type: String,

    /// The error message.
    msg: String,
}

/// Struct to represent configuration errors.
#[derive(Debug)]
pub struct ConfigErrorStruct {
    /// The error message.
    msg: String,
}

/// Struct to represent wire protocol errors.
#[derive(Debug)]
pub struct ProtocolErrorStruct {
    /// The error message.
    msg: String,
}

/// Struct to represent a skin rejected by default handling.
#[derive(Debug)]
pub struct SkinRejectedStruct {
    /// The error message.
    msg: String,
}

/// Struct to represent upload errors.
#[derive(Debug)]
pub struct UploadErrorStruct {
    /// The error message.
    msg: String,
}

/// Enum to represent the different collector error categories.
#[derive(Debug)]
pub enum CollectorError {
    IoError(IoErrorStruct),
    ConfigError(ConfigErrorStruct),
    ProtocolError(ProtocolErrorStruct),
    SkinRejected(SkinRejectedStruct),
    UploadError(UploadErrorStruct),
}

impl CollectorError {
    /// Create a new configuration error.
    pub fn config_error(msg: &str) -> Self {
        CollectorError::ConfigError(ConfigErrorStruct {
            msg: msg.to_string(),
        })
    }

    /// Create a new wire protocol error.
    pub fn protocol_error(msg: &str) -> Self {
        CollectorError::ProtocolError(ProtocolErrorStruct {
            msg: msg.to_string(),
        })
    }

    /// Create a new skin rejection error.
    pub fn skin_rejected(msg: String) -> Self {
        CollectorError::SkinRejected(SkinRejectedStruct { msg })
    }
}

impl std::fmt::Display for CollectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectorError::IoError(io_err) => {
                write!(f, "IO {} Error: {}", io_err.error_type, io_err.msg)
            }
            CollectorError::ConfigError(config_err) => {
                write!(f, "Config Error: {}", config_err.msg)
            }
            CollectorError::ProtocolError(protocol_err) => {
                write!(f, "Protocol Error: {}", protocol_err.msg)
            }
            CollectorError::SkinRejected(rejected_err) => {
                write!(f, "Skin Rejected: {}", rejected_err.msg)
            }
            CollectorError::UploadError(upload_err) => {
                write!(f, "Upload Error: {}", upload_err.msg)
            }
        }
    }
}

impl std::error::Error for CollectorError {}

impl From<std::io::Error> for CollectorError {
    fn from(error: std::io::Error) -> Self {
        CollectorError::IoError(IoErrorStruct {
            error_type: error.kind().to_string(),
            msg: error.to_string(),
        })
    }
}

impl From<toml::de::Error> for CollectorError {
    fn from(error: toml::de::Error) -> Self {
        CollectorError::ConfigError(ConfigErrorStruct {
            msg: error.to_string(),
        })
    }
}

impl From<toml::ser::Error> for CollectorError {
    fn from(error: toml::ser::Error) -> Self {
        CollectorError::ConfigError(ConfigErrorStruct {
            msg: error.to_string(),
        })
    }
}

impl From<serde_json::Error> for CollectorError {
    fn from(error: serde_json::Error) -> Self {
        CollectorError::ProtocolError(ProtocolErrorStruct {
            msg: error.to_string(),
        })
    }
}

impl From<reqwest::Error> for CollectorError {
    fn from(error: reqwest::Error) -> Self {
        CollectorError::UploadError(UploadErrorStruct {
            msg: error.to_string(),
        })
    }
}
