//! Tone name → prompt instruction tables.

/// Tones accepted by the thread and tweet endpoints.
pub const POST_TONES: &[(&str, &str)] = &[
    ("neutral", "Use a balanced and objective tone"),
    ("formal", "Use a professional and academic tone"),
    ("casual", "Use a friendly and conversational tone"),
    ("enthusiastic", "Use an energetic and excited tone"),
];

/// Used for any tone not in [`POST_TONES`].
pub const POST_TONE_FALLBACK: &str = "Use a balanced tone";

/// Tones accepted by the bio endpoint.
pub const BIO_TONES: &[(&str, &str)] = &[
    ("professional", "Keep it formal and business-focused"),
    ("casual", "Make it friendly and approachable"),
    ("creative", "Add personality and creative flair"),
    ("technical", "Focus on technical expertise and achievements"),
];

/// Used for any tone not in [`BIO_TONES`].
pub const BIO_TONE_FALLBACK: &str = "Keep it professional";

fn lookup(table: &'static [(&'static str, &'static str)], tone: &str) -> Option<&'static str> {
    let tone = tone.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tone))
        .map(|(_, instruction)| *instruction)
}

/// Instruction for a thread or tweet tone.
pub fn post_instruction(tone: &str) -> &'static str {
    lookup(POST_TONES, tone).unwrap_or(POST_TONE_FALLBACK)
}

/// Instruction for a bio tone.
pub fn bio_instruction(tone: &str) -> &'static str {
    lookup(BIO_TONES, tone).unwrap_or(BIO_TONE_FALLBACK)
}
