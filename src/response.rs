use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform success/failure envelope returned by every operation.
///
/// Callers branch on `success` alone; a failure never carries `data`.
/// The only ways to build one are [`ApiResult::success`] and
/// [`ApiResult::failure`], which keep that invariant.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResult<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T> ApiResult<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_data() {
        let result = ApiResult::success(42, "ok");
        assert!(result.success);
        assert_eq!(result.data, Some(42));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn failure_never_carries_data() {
        let result: ApiResult<i32> = ApiResult::failure("nope", vec!["bad input".into()]);
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.errors, vec!["bad input".to_string()]);
    }
}
