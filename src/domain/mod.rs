//! Domain layer - Core business entities and logic
//!
//! Contains the login input rules, the education resource and the
//! account/password types used by authentication.

pub mod credentials;
pub mod education;
pub mod password;
pub mod user;

pub use credentials::{LoginDto, LoginViolation, LoginViolationKind};
pub use education::{check_period, Education, EducationChanges, NewEducation};
pub use password::Password;
pub use user::User;
