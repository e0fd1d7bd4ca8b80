//! Error types for the blog reader

use std::fmt;

use uuid::Uuid;

#[derive(Debug)]
pub enum ReaderError {
    Blog(blog_content_client::BlogError),
    NotFound(Uuid),
    Output(serde_json::Error),
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderError::Blog(err) => write!(f, "Blog error: {}", err),
            ReaderError::NotFound(id) => write!(f, "post {} not found", id),
            ReaderError::Output(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl std::error::Error for ReaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReaderError::Blog(err) => Some(err),
            ReaderError::Output(err) => Some(err),
            _ => None,
        }
    }
}

impl From<blog_content_client::BlogError> for ReaderError {
    fn from(err: blog_content_client::BlogError) -> Self {
        ReaderError::Blog(err)
    }
}

impl From<serde_json::Error> for ReaderError {
    fn from(err: serde_json::Error) -> Self {
        ReaderError::Output(err)
    }
}

pub type Result<T> = std::result::Result<T, ReaderError>;
