pub mod message;
pub mod message_log;
pub mod mock;
pub mod phase;
pub mod session;
pub mod team;
pub mod timezone;
