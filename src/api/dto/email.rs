use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct EmailRequestDto {
    pub to_email: String,
}

/// `is_reachable` is one of `safe`, `risky`, `invalid`, `unknown`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailResponseDto {
    pub is_reachable: String,
}
