//! threadloom-core: turns one completion into a thread, a tweet or a bio.
//!
//! The [`Generator`] owns a [`threadloom_llms::Provider`] and exposes one
//! fallible operation per output kind. [`segment::segment_thread`] is the
//! pure routine that cuts a numbered completion into tweets.

pub mod error;
pub mod generator;
pub mod prompt;
pub mod request;
pub mod segment;
pub mod tone;

pub use error::{Result, ThreadloomError};
pub use generator::{GenerationSettings, Generator};
pub use request::{BioRequest, BioResponse, ThreadRequest, ThreadResponse, TweetRequest, TweetResponse};
pub use segment::segment_thread;
