//! DTOs for users_sea adapter.

/// DTO for creating a new user.
#[derive(Clone)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
}

impl UserCreate {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Password stays out of Debug output.
impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
