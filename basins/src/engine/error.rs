use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    InvalidConfig(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Image(image::ImageError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            EngineError::Io(e) => write!(f, "io error: {}", e),
            EngineError::Json(e) => write!(f, "json error: {}", e),
            EngineError::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidConfig(_) => None,
            EngineError::Io(e) => Some(e),
            EngineError::Json(e) => Some(e),
            EngineError::Image(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::Io(e)
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Json(e)
    }
}

impl From<image::ImageError> for EngineError {
    fn from(e: image::ImageError) -> Self {
        EngineError::Image(e)
    }
}
