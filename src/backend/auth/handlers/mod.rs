//! Handlers behind `/api/auth`.
//!
//! `signup` and `login` answer with an `AuthResponse` (token plus public
//! profile); `get_me` echoes the profile `AuthUser` resolved. Bodies are the
//! `shared::api` types the client wrapper sends.

pub mod login;
pub mod me;
pub mod signup;

pub use login::login;
pub use me::get_me;
pub use signup::signup;
