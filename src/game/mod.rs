pub mod bank;
pub mod player;
pub mod session;
