//! The authentication capability and its mock implementation.

use crate::error::AuthError;
use crate::user::User;

/// The authentication capability consumed by the storefront.
///
/// Cart and catalog logic never touch this directly; a real backend
/// implementation can be substituted without changing either.
pub trait AuthProvider {
    /// Sign in with email and password.
    fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError>;

    /// Create an account and sign in.
    fn register(&mut self, name: &str, email: &str, password: &str) -> Result<&User, AuthError>;

    /// Sign out the current user.
    fn logout(&mut self);

    /// The signed-in user, if any.
    fn current_user(&self) -> Option<&User>;

    /// Check whether a user is signed in.
    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

/// In-memory mock authentication.
///
/// Accepts any non-empty credentials and fabricates a user record; empty
/// input fails with `InvalidCredentials`. Nothing is verified or
/// persisted, and no security properties hold.
#[derive(Debug, Clone, Default)]
pub struct MockAuth {
    current: Option<User>,
}

impl MockAuth {
    /// The display name fabricated for logins (registration keeps the
    /// name the shopper typed).
    pub const FABRICATED_NAME: &'static str = "John Doe";

    /// Create a signed-out mock provider.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthProvider for MockAuth {
    fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(self.current.insert(User::new("1", Self::FABRICATED_NAME, email)))
    }

    fn register(&mut self, name: &str, email: &str, password: &str) -> Result<&User, AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(self.current.insert(User::new("1", name, email)))
    }

    fn logout(&mut self) {
        self.current = None;
    }

    fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_fabricates_user() {
        let mut auth = MockAuth::new();
        let user = auth.login("shopper@example.com", "hunter2").unwrap();

        assert_eq!(user.name, MockAuth::FABRICATED_NAME);
        assert_eq!(user.email, "shopper@example.com");
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_login_rejects_empty_input() {
        let mut auth = MockAuth::new();
        assert_eq!(auth.login("", "hunter2"), Err(AuthError::InvalidCredentials));
        assert_eq!(
            auth.login("shopper@example.com", ""),
            Err(AuthError::InvalidCredentials)
        );
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_register_keeps_typed_name() {
        let mut auth = MockAuth::new();
        let user = auth
            .register("Asha", "asha@example.com", "hunter2")
            .unwrap();

        assert_eq!(user.name, "Asha");
        assert_eq!(user.email, "asha@example.com");
    }

    #[test]
    fn test_register_rejects_empty_input() {
        let mut auth = MockAuth::new();
        assert_eq!(
            auth.register("", "asha@example.com", "hunter2"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_logout_clears_user() {
        let mut auth = MockAuth::new();
        auth.login("shopper@example.com", "hunter2").unwrap();
        auth.logout();

        assert!(auth.current_user().is_none());
        assert!(!auth.is_authenticated());
    }
}
