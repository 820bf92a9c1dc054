use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// An opaque, cheaply clonable error returned by queries.
///
/// Wraps whatever error the failing exchange produced. Callers that only log
/// and move on can use the `Display` impl; callers that need the concrete
/// error can walk `source()`.
#[derive(Clone, Debug)]
pub struct QueryError {
    inner: Arc<Box<dyn Error + Send + Sync>>
}

impl QueryError {
    pub fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl<T: Error + Send + Sync + 'static> From<T> for QueryError {
    fn from(e: T) -> Self {
        QueryError {
            inner: Arc::new(Box::new(e))
        }
    }
}
