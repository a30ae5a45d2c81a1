//! Prompt builders and system instructions.

use threadloom_constant::generation::{BIO_CHAR_LIMIT, TWEET_CHAR_LIMIT};

use crate::tone::{bio_instruction, post_instruction};

/// Thread strategist: keeps every tweet tied to the input content.
pub const THREAD_SYSTEM: &str = r#"You are an expert content strategist who creates highly focused Twitter threads.
Your threads are known for:
- Staying strictly on topic
- Using specific examples from the input
- Never including generic advice
- Being concise and information-dense
- Converting the given content directly into tweet format

You always ensure each tweet directly relates to the input content and avoid generic statements."#;

pub const TWEET_SYSTEM: &str = "You are a social media expert who creates engaging tweets.";

pub const BIO_SYSTEM: &str = "You are an expert at creating engaging social media bios.";

/// User prompt for a numbered thread of `length` tweets.
pub fn thread_prompt(content: &str, length: usize, tone: &str, writing_style: &str) -> String {
    let mut parts = Vec::new();
    parts.push(
        "Create an engaging Twitter thread that feels natural and conversational while covering the given content.\n\
         Each tweet should start with a number (1., 2., etc.).\n"
            .to_string(),
    );

    let style = writing_style.trim();
    if !style.is_empty() {
        parts.push(format!(
            "Match this writing style/voice in the generated tweets:\n{style}\n"
        ));
    }

    parts.push(format!(
        "Key Points:\n\
         • First tweet should hook readers naturally - avoid \"In this thread...\" or \"Let's talk about...\"\n\
         • Jump straight into the topic with an interesting angle or surprising fact\n\
         • Each tweet must be under {TWEET_CHAR_LIMIT} characters\n\
         • Focus on specific insights from the content\n\
         • Use real examples and details from the given content\n"
    ));
    parts.push(
        "Thread Flow:\n\
         • Tweet 1: Start with an attention-grabbing insight or statement that makes people want to read more\n\
         • Middle Tweets: Break down key points with specific examples\n\
         • Final Tweet: Wrap up with main takeaways + relevant hashtags\n"
            .to_string(),
    );
    parts.push(
        "Style Guide:\n\
         • Write like you're talking to a friend\n\
         • Use natural language and avoid corporate/formal phrases\n\
         • Include 1-2 fitting emojis per tweet\n\
         • Break complex ideas into digestible points\n"
            .to_string(),
    );
    parts.push(format!(
        "Important:\n\
         • Keep everything specific to the input content\n\
         • Generate exactly {length} tweets\n\
         • {}\n\
         • Avoid phrases like \"Thread 🧵\" or \"Let me explain\"\n\
         • Don't use generic transitions between tweets\n",
        post_instruction(tone)
    ));
    parts.push(format!("Content to transform into a thread:\n{}", content.trim()));
    parts.join("\n")
}

/// User prompt for one standalone tweet.
pub fn tweet_prompt(topic: &str, tone: &str, writing_style: &str) -> String {
    let mut requirements = vec![
        format!("• Must be under {TWEET_CHAR_LIMIT} characters"),
        "• Include 1-2 relevant emojis".to_string(),
        "• Be specific and informative".to_string(),
        format!("• {}", post_instruction(tone)),
    ];
    let style = writing_style.trim();
    if !style.is_empty() {
        requirements.push(style.to_string());
    }

    format!(
        "Create an engaging tweet about the following topic.\n\n\
         Topic: {}\n\n\
         Requirements:\n{}\n\n\
         Style Guide:\n\
         • Write naturally and conversationally\n\
         • Avoid hashtag spam\n\
         • Make it shareable and engaging\n\
         • Focus on providing value",
        topic.trim(),
        requirements.join("\n")
    )
}

/// User prompt for a profile bio.
pub fn bio_prompt(name: &str, expertise: &str, interests: &[String], tone: &str) -> String {
    let interests = interests
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a compelling Twitter bio for:\n\n\
         Name: {}\n\
         Expertise: {}\n\
         Interests: {interests}\n\n\
         Requirements:\n\
         • Maximum {BIO_CHAR_LIMIT} characters\n\
         • Include 1-2 relevant emojis\n\
         • {}\n\
         • Highlight expertise and personality\n\n\
         Style Guide:\n\
         • Be concise but informative\n\
         • Show personality while maintaining professionalism\n\
         • Include key achievements/roles\n\
         • Make it memorable",
        name.trim(),
        expertise.trim(),
        bio_instruction(tone)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_prompt_carries_length_tone_and_content() {
        let prompt = thread_prompt("Rust borrows are checked at compile time.", 7, "formal", "");
        assert!(prompt.contains("Generate exactly 7 tweets"));
        assert!(prompt.contains("Use a professional and academic tone"));
        assert!(prompt.ends_with("Content to transform into a thread:\nRust borrows are checked at compile time."));
        assert!(!prompt.contains("writing style/voice"));
    }

    #[test]
    fn test_thread_prompt_includes_style_when_given() {
        let prompt = thread_prompt("x", 3, "neutral", "  short, punchy, lowercase ");
        assert!(prompt.contains(
            "Match this writing style/voice in the generated tweets:\nshort, punchy, lowercase\n"
        ));
    }

    #[test]
    fn test_thread_prompt_unknown_tone_falls_back() {
        let prompt = thread_prompt("x", 3, "grumpy", "");
        assert!(prompt.contains("• Use a balanced tone\n"));
    }

    #[test]
    fn test_tweet_prompt() {
        let prompt = tweet_prompt(" async Rust ", "casual", "");
        assert!(prompt.contains("Topic: async Rust\n"));
        assert!(prompt.contains("• Use a friendly and conversational tone"));
        assert!(prompt.contains("under 280 characters"));

        let styled = tweet_prompt("async Rust", "casual", "like a pirate");
        assert!(styled.contains("conversational tone\nlike a pirate\n"));
    }

    #[test]
    fn test_bio_prompt_joins_interests() {
        let interests = vec!["compilers".to_string(), " ".to_string(), "climbing".to_string()];
        let prompt = bio_prompt("Ada", "Systems engineer", &interests, "technical");
        assert!(prompt.contains("Name: Ada\n"));
        assert!(prompt.contains("Interests: compilers, climbing\n"));
        assert!(prompt.contains("Maximum 160 characters"));
        assert!(prompt.contains("Focus on technical expertise and achievements"));
    }
}
