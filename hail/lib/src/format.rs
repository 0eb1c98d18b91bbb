//! Greeting format selection.
//!
//! Owns the fixed inventory of greeting templates and picks one uniformly
//! at random per call. The choice is cosmetic, so the thread-local RNG is
//! plenty; there is no seeding contract.

use rand::seq::SliceRandom;

/// Placeholder each template embeds exactly once.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// The fixed, ordered inventory of greeting templates.
///
/// Immutable for the life of the process. Each entry contains exactly one
/// [`NAME_PLACEHOLDER`] substitution slot.
pub const GREETING_FORMATS: [&str; 3] = [
    "Hello {name}. Welcome!",
    "All welcome the mighty {name}!",
    "May the lord be with you {name}",
];

/// Pick one greeting template, uniformly at random.
///
/// Each call is an independent draw; over enough calls every template in
/// [`GREETING_FORMATS`] shows up.
///
/// ## Examples
///
/// ```
/// use hail_lib::format::{GREETING_FORMATS, pick_format};
///
/// assert!(GREETING_FORMATS.contains(&pick_format()));
/// ```
pub fn pick_format() -> &'static str {
    // The array is non-empty, so `choose` cannot return None.
    let format = GREETING_FORMATS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GREETING_FORMATS[0]);
    tracing::trace!(format, "picked greeting format");
    format
}

/// Substitute `name` into a template at its placeholder slot.
pub(crate) fn render(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}
