//! Greeting generation for single names and batches.

use std::collections::HashMap;

use crate::error::{HailError, Result};
use crate::format::{pick_format, render};

/// Generate a greeting message for a single name.
///
/// Picks one of the fixed greeting formats at random and substitutes
/// `name` into it. The returned message contains the name exactly once.
///
/// ## Errors
///
/// Returns [`HailError::EmptyName`] when `name` is empty. No other input
/// is rejected.
///
/// ## Examples
///
/// ```
/// use hail_lib::greet;
///
/// let message = greet("Emily").unwrap();
/// assert!(message.contains("Emily"));
///
/// assert!(greet("").is_err());
/// ```
pub fn greet(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(HailError::EmptyName);
    }

    let message = render(pick_format(), name);
    tracing::debug!(name, %message, "generated greeting");
    Ok(message)
}

/// Generate greetings for a batch of names.
///
/// Names are processed in order and the result is a name → message lookup
/// table. The batch is all-or-nothing: the first invalid name aborts the
/// whole call and nothing computed so far is returned. Duplicate names
/// collapse to a single entry (last message wins).
///
/// ## Errors
///
/// Returns [`HailError::EmptyName`] if any name in the batch is empty.
///
/// ## Examples
///
/// ```
/// use hail_lib::greet_all;
///
/// let messages = greet_all(["Prince", "Emily"]).unwrap();
/// assert_eq!(messages.len(), 2);
/// assert!(messages["Prince"].contains("Prince"));
/// ```
pub fn greet_all<I, S>(names: I) -> Result<HashMap<String, String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut messages = HashMap::new();

    for name in names {
        let name = name.as_ref();
        let message = greet(name)?;
        messages.insert(name.to_string(), message);
    }

    tracing::debug!(count = messages.len(), "generated greeting batch");
    Ok(messages)
}
