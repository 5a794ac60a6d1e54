use serde::Serialize;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// Every non-204 response uses this shape:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// Errors carry an empty object in `data`:
/// ```json
/// {
///   "success": false,
///   "data": {},
///   "message": "Course with ID: 7 not found"
/// }
/// ```
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

/// Serializes to `{}`; used as the `data` of error responses.
#[derive(Debug, Serialize, Default)]
pub struct Empty {}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
