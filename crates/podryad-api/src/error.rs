/// Failures talking to the remote backend.
///
/// None of these are retried automatically; the caller surfaces them
/// and leaves local state untouched.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The report or remediation does not exist server-side.
    #[error("resource not found")]
    NotFound,

    /// The backend answered with a non-2xx status.
    #[error("backend returned status {code}")]
    Status { code: u16 },

    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered 2xx but the payload did not parse.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Callers render not-found as a placeholder view instead of a
    /// toast.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguished() {
        assert!(ApiError::NotFound.is_not_found());
        assert!(!ApiError::Status { code: 500 }.is_not_found());
        assert!(!ApiError::Decode("bad json".to_string()).is_not_found());
    }
}
