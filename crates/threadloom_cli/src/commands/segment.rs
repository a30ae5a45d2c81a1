//! `threadloom segment`: cut numbered text into tweets without a provider.

use anyhow::{bail, Result};
use threadloom_core::{segment_thread, ThreadResponse};

use crate::output;

pub fn handle(text: &str, count: usize) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }
    let thread = segment_thread(text, count);
    if thread.len() < count {
        output::warning(&format!(
            "found {} of {count} tweets",
            thread.len()
        ));
    }

    let table = output::tweet_table(&thread);
    output::result("thread", &ThreadResponse { thread }, &table.to_string());
    Ok(())
}
