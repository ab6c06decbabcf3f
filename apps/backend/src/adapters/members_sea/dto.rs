//! DTOs for members_sea adapter.

#[derive(Clone)]
pub struct MemberCreate {
    pub username: String,
    pub password: String,
}

impl MemberCreate {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for MemberCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberCreate")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ProfileCreate {
    pub member_id: i64,
    pub full_name: Option<String>,
}
