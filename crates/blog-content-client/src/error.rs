//! Error types for the blog content client

use std::fmt;

use uuid::Uuid;

/// Errors that can occur while reading the content store
#[derive(Debug)]
pub enum BlogError {
    /// Transport failure or timeout
    Http(Box<reqwest::Error>),
    /// The content store answered with a non-success status
    Status { path: String, status: u16 },
    /// The metadata manifest was not valid JSON
    Json(serde_json::Error),
    /// A base URL or relative path could not be resolved
    InvalidUrl(String),
    /// A post's body could not be fetched
    PostFetch {
        id: Uuid,
        location: String,
        source: Box<BlogError>,
    },
}

impl fmt::Display for BlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogError::Http(err) => write!(f, "HTTP error: {}", err),
            BlogError::Status { path, status } => {
                write!(f, "Content store returned status {} for {}", status, path)
            }
            BlogError::Json(err) => write!(f, "Manifest parse error: {}", err),
            BlogError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            BlogError::PostFetch {
                id,
                location,
                source,
            } => write!(f, "Failed to fetch post {} from {}: {}", id, location, source),
        }
    }
}

impl std::error::Error for BlogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlogError::Http(err) => Some(err.as_ref()),
            BlogError::Json(err) => Some(err),
            BlogError::PostFetch { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BlogError {
    fn from(err: reqwest::Error) -> Self {
        BlogError::Http(Box::new(err))
    }
}

impl From<serde_json::Error> for BlogError {
    fn from(err: serde_json::Error) -> Self {
        BlogError::Json(err)
    }
}

impl From<url::ParseError> for BlogError {
    fn from(err: url::ParseError) -> Self {
        BlogError::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_status_error_display() {
        let err = BlogError::Status {
            path: "blogging/blogs.json".to_string(),
            status: 404,
        };
        assert_eq!(
            format!("{}", err),
            "Content store returned status 404 for blogging/blogs.json"
        );
    }

    #[test]
    fn test_post_fetch_error_keeps_cause() {
        let id = Uuid::nil();
        let err = BlogError::PostFetch {
            id,
            location: "post1.md".to_string(),
            source: Box::new(BlogError::Status {
                path: "blogging/post1.md".to_string(),
                status: 500,
            }),
        };

        let message = err.to_string();
        assert!(message.contains("post1.md"));
        assert!(message.contains("status 500"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_json_error_from() {
        let parse_err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let err: BlogError = parse_err.into();
        assert!(matches!(err, BlogError::Json(_)));
        assert!(err.to_string().starts_with("Manifest parse error"));
    }

    #[test]
    fn test_url_error_from() {
        let err: BlogError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, BlogError::InvalidUrl(_)));
    }
}
