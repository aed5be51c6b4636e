//! Flowed layout — each flattened line becomes one paragraph block in output
//! order. No pagination concept, no wrapping: flowed consumers reflow text
//! themselves.

/// Renders the flattened lines as blank-line-separated paragraph blocks.
pub fn render_flowed(lines: &[String]) -> Vec<u8> {
    let mut output = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(line);
        output.push('\n');
    }
    output.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_block_per_line_in_order() {
        let lines = vec![
            "First paragraph".to_string(),
            "Second paragraph".to_string(),
            "Third paragraph".to_string(),
        ];
        let output = String::from_utf8(render_flowed(&lines)).unwrap();
        assert_eq!(
            output,
            "First paragraph\n\nSecond paragraph\n\nThird paragraph\n"
        );
    }

    #[test]
    fn test_no_line_merging_or_reordering() {
        let lines = vec!["b".to_string(), "a".to_string()];
        let output = String::from_utf8(render_flowed(&lines)).unwrap();
        let blocks: Vec<&str> = output.trim_end().split("\n\n").collect();
        assert_eq!(blocks, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert!(render_flowed(&[]).is_empty());
    }
}
