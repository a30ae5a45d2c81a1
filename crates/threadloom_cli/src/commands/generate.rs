//! `threadloom thread`, `tweet` and `bio`: one completion each.

use anyhow::Result;
use threadloom_constant::generation::{BIO_CHAR_LIMIT, TWEET_CHAR_LIMIT};
use threadloom_core::{
    BioRequest, BioResponse, Generator, ThreadRequest, ThreadResponse, TweetRequest,
    TweetResponse,
};
use threadloom_server::config::generation_settings_from_env;

use crate::cli::Voice;
use crate::output;

/// `--model` wins over `OPENAI_MODEL`.
fn generator(model: Option<String>) -> Result<Generator> {
    let mut settings = generation_settings_from_env()?;
    if let Some(model) = model {
        settings = settings.with_model(model);
    }
    Ok(Generator::from_env(settings)?)
}

pub async fn thread(content: String, length: i64, voice: Voice, model: Option<String>) -> Result<()> {
    let request = ThreadRequest {
        content,
        thread_length: length,
        tone: voice.tone,
        writing_style: voice.style,
    };
    let count = request.validate()?;
    let generator = generator(model)?;

    let spinner = output::spinner(&format!("Writing a {count}-tweet thread..."));
    let result = generator.thread(&request).await;
    spinner.finish_and_clear();
    let thread = result?;

    if thread.len() < count {
        output::warning(&format!("model returned {} of {count} tweets", thread.len()));
    }
    let table = output::tweet_table(&thread);
    output::result("thread", &ThreadResponse { thread }, &table.to_string());
    Ok(())
}

pub async fn tweet(topic: String, voice: Voice, model: Option<String>) -> Result<()> {
    let request = TweetRequest {
        topic,
        tone: voice.tone,
        writing_style: voice.style,
    };
    request.validate()?;
    let generator = generator(model)?;

    let spinner = output::spinner("Writing a tweet...");
    let result = generator.tweet(&request).await;
    spinner.finish_and_clear();
    let tweet = result?;

    output::result("tweet", &TweetResponse { tweet: tweet.clone() }, &tweet);
    length_note(&tweet, TWEET_CHAR_LIMIT);
    Ok(())
}

pub async fn bio(
    name: String,
    expertise: String,
    interests: Vec<String>,
    tone: String,
    model: Option<String>,
) -> Result<()> {
    let request = BioRequest {
        name,
        expertise,
        interests,
        tone,
    };
    request.validate()?;
    let generator = generator(model)?;

    let spinner = output::spinner("Writing a bio...");
    let result = generator.bio(&request).await;
    spinner.finish_and_clear();
    let bio = result?;

    output::result("bio", &BioResponse { bio: bio.clone() }, &bio);
    length_note(&bio, BIO_CHAR_LIMIT);
    Ok(())
}

fn length_note(text: &str, limit: usize) {
    let chars = text.chars().count();
    if chars > limit {
        output::warning(&format!("{chars} characters, over the {limit} limit"));
    } else {
        output::dim(&format!("{chars}/{limit} characters"));
    }
}
