//! Theme for Cardfold.

mod styles;

pub use styles::GLOBAL_STYLES;
