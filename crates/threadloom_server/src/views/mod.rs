pub mod bio;
pub mod health;
pub mod thread;
pub mod tweet;
