use log::{debug, trace};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::Method;

/// Process-wide lookup table, keyed by canonical name.
///
/// Built on first access and read-only afterwards.
static METHODS: Lazy<FxHashMap<&'static str, Method>> = Lazy::new(|| {
    let table: FxHashMap<_, _> = Method::iter().map(|m| (m.as_str(), m)).collect();
    debug!("built HTTP method table with {} entries", table.len());
    table
});

/// Resolves `name` to a [`Method`].
///
/// Every whitespace character (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`) is
/// removed, not only leading and trailing ones, and the remainder is
/// upper-cased with the locale-independent Unicode mapping before an exact
/// lookup. Returns `None` when nothing matches.
///
/// ```
/// use http_methods::{Method, resolve};
///
/// assert_eq!(resolve(" p a t c h "), Some(Method::Patch));
/// assert_eq!(resolve("nonsense"), None);
/// ```
pub fn resolve(name: &str) -> Option<Method> {
    let normalized = normalize(name);
    let method = METHODS.get(normalized.as_str()).copied();

    if method.is_none() {
        trace!("unknown HTTP method {name:?} (normalized to {normalized:?})");
    }

    method
}

/// `\x0B` is whitespace here but not for `char::is_ascii_whitespace`.
pub(super) fn is_token_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn normalize(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| !is_token_whitespace(*c)).collect();
    stripped.to_uppercase()
}
