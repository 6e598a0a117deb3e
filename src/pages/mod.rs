//! Page components for Cardfold.

mod gallery;
mod login;

pub use gallery::Gallery;
pub use login::Login;
