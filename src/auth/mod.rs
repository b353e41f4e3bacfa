//! Authentication module
//!
//! JWT-based token issue/verify with bcrypt password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{AuthError, Claims, TokenService, UserRole};
pub use middleware::AuthUser;
pub use password::PasswordService;
