//! UI Components for Cardfold.

mod card_image;
mod card_view;

pub use card_image::CardImage;
pub use card_view::CardView;
