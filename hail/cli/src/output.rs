use std::collections::HashMap;

/// Print the greeting map as human-readable text.
///
/// One `name: message` line per entry, sorted by name so terminal output
/// is stable even though the underlying map is unordered.
pub fn print_text(messages: &HashMap<String, String>) {
    let mut names: Vec<&String> = messages.keys().collect();
    names.sort();

    for name in names {
        println!("{name}: {message}", message = messages[name]);
    }
}

/// Print the greeting map as a JSON object keyed by name.
pub fn print_json(messages: &HashMap<String, String>) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(messages)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_json_round_trips_map() {
        let mut messages = HashMap::new();
        messages.insert("Emily".to_string(), "Hello Emily. Welcome!".to_string());

        let json = serde_json::to_string_pretty(&messages).unwrap();
        let parsed: HashMap<String, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, messages);
    }
}
