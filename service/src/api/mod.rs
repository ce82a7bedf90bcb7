pub mod badge_handler;
pub mod health;

pub use badge_handler::generate_badge;
pub use health::health_check;
