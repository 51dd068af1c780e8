use serde::{Deserialize, Serialize};

/// `POST /api/login` payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response; the token is attached as a bearer header to
/// every admin request.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
