const MAX_VISIBLE_CHARS: usize = 100;

/// Single-line, length-capped rendering of transcript text for log fields.
pub fn sanitize_transcript(text: &str) -> String {
    let flattened: String = text
        .trim()
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if flattened.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = flattened.chars().count();
    if total > MAX_VISIBLE_CHARS {
        let visible: String = flattened.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total)
    } else {
        flattened
    }
}
