/// Fallback text when the backend reports failure without a message.
pub const GENERIC_FAILURE_MESSAGE: &str = "API call failed";

/// Normalized outcome of a single remote call.
///
/// Exactly one of `data` / `error` is populated; the constructors are the
/// only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    data: Option<T>,
    error: Option<String>,
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }

    pub fn into_result(self) -> Result<T, String> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(self
                .error
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())),
        }
    }
}
