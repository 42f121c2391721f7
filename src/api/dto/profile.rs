use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub roles: Vec<String>,
}
