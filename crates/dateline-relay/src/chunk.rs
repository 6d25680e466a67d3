/// Maximum characters per chunk — a few below Discord's 2000 limit to leave
/// room for the code-block wrappers.
pub const MAX_MESSAGE_LEN: usize = 1990;

/// Split `text` into chunks of at most [`MAX_MESSAGE_LEN`] characters,
/// breaking only on line boundaries.
///
/// Lines are accumulated in order; when appending the next line would push the
/// buffer past the limit, the buffer is flushed (trimmed) and a new one starts
/// from that line. A single line longer than the limit becomes its own
/// oversized chunk — it is never split mid-line.
pub fn split_message(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.split('\n') {
        if current.len() + line.len() + 1 > MAX_MESSAGE_LEN {
            if !current.is_empty() {
                chunks.push(current.trim().to_string());
            }
            current = line.to_string();
        } else if current.is_empty() {
            current.push_str(line);
        } else {
            current.push('\n');
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}
