//! Plain text rendering.

/// Join chart lines with newlines, ending with a trailing newline.
pub fn lines_to_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    if !lines.is_empty() {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_to_text() {
        let lines = vec!["[Verse]".to_string(), String::new(), "1 4".to_string()];
        assert_eq!(lines_to_text(&lines), "[Verse]\n\n1 4\n");
        assert_eq!(lines_to_text(&[]), "");
    }
}
