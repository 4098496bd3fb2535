use crate::core::errors::Result;

/// Port for looking up the caller's default recipient identity.
pub trait IdentitySource {
    /// The configured email address of the current user.
    fn email(&self) -> Result<String>;
}
