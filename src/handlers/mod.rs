pub mod root;
pub mod health;

pub use root::root_handler;
pub use health::health_handler;
