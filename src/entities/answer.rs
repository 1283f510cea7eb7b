/// Replies accepted as "yes" after trimming and lowercasing.
const AFFIRMATIVE: [&str; 5] = ["s", "si", "sí", "y", "yes"];

/// Whether a confirmation reply means yes. Empty input is a no.
pub fn is_affirmative(reply: &str) -> bool {
    let reply = reply.trim().to_lowercase();
    AFFIRMATIVE.contains(&reply.as_str())
}
