use std::fmt;
use std::str::FromStr;

use hyper::header::{HeaderValue, InvalidHeaderValue};

use super::registry::is_token_whitespace;
use super::{Method, UnknownMethod, resolve};

/// Compact set of [`Method`]s, one bit per method.
///
/// Iterates and formats in declaration order, so the `Display` output is a
/// stable `Allow` header value such as `GET, HEAD`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MethodSet(u8);

impl MethodSet {
    pub const EMPTY: MethodSet = MethodSet(0);

    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < Method::ALL.len() {
            bits |= Method::ALL[i].bit();
            i += 1;
        }
        MethodSet(bits)
    }

    pub const fn contains(&self, method: Method) -> bool {
        self.0 & method.bit() != 0
    }

    /// Adds `method`, returning whether it was newly inserted.
    pub fn insert(&mut self, method: Method) -> bool {
        let added = !self.contains(method);
        self.0 |= method.bit();
        added
    }

    /// Removes `method`, returning whether it was present.
    pub fn remove(&mut self, method: Method) -> bool {
        let present = self.contains(method);
        self.0 &= !method.bit();
        present
    }

    pub const fn union(self, other: MethodSet) -> MethodSet {
        MethodSet(self.0 | other.0)
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Method> + '_ {
        Method::iter().filter(|m| self.contains(*m))
    }

    /// Whether any method in the set expects a payload.
    pub fn expects_body(&self) -> bool {
        self.iter().any(|m| m.has_body())
    }

    /// Renders the set as an `Allow` header value.
    pub fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.to_string())
    }
}

impl From<Method> for MethodSet {
    fn from(method: Method) -> Self {
        MethodSet(method.bit())
    }
}

impl FromIterator<Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        let mut set = MethodSet::EMPTY;
        for method in iter {
            set.insert(method);
        }
        set
    }
}

impl Extend<Method> for MethodSet {
    fn extend<I: IntoIterator<Item = Method>>(&mut self, iter: I) {
        for method in iter {
            self.insert(method);
        }
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, method) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(method.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for MethodSet {
    type Err = UnknownMethod;

    /// Parses a comma-separated list such as an `Allow` header value.
    ///
    /// Empty entries are skipped; each entry is matched like [`resolve`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|token| token.trim_matches(is_token_whitespace))
            .filter(|token| !token.is_empty())
            .map(|token| resolve(token).ok_or_else(|| UnknownMethod::new(token)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove() {
        let mut set = MethodSet::EMPTY;
        assert!(set.is_empty());
        assert!(set.insert(Method::Get));
        assert!(!set.insert(Method::Get));
        assert!(set.insert(Method::Head));
        assert_eq!(set.len(), 2);
        assert!(set.contains(Method::Head));
        assert!(!set.contains(Method::Post));

        assert!(set.remove(Method::Head));
        assert!(!set.remove(Method::Head));
        assert_eq!(set, MethodSet::from(Method::Get));
    }

    #[test]
    fn all_contains_every_method() {
        let all = MethodSet::all();
        assert_eq!(all.len(), Method::ALL.len());
        assert!(Method::iter().all(|m| all.contains(m)));
        assert_eq!(all.iter().collect::<Vec<_>>(), Method::ALL.to_vec());
    }

    #[test]
    fn displays_in_declaration_order() {
        let set: MethodSet = [Method::Head, Method::Get].into_iter().collect();
        assert_eq!(set.to_string(), "GET, HEAD");
        assert_eq!(MethodSet::EMPTY.to_string(), "");
        assert_eq!(
            MethodSet::all().to_string(),
            "POST, GET, PUT, PATCH, HEAD, DELETE"
        );
    }

    #[test]
    fn parses_allow_header_lists() {
        let set: MethodSet = "get, Head ,,delete".parse().unwrap();
        assert_eq!(set.to_string(), "GET, HEAD, DELETE");
        assert_eq!("".parse::<MethodSet>().unwrap(), MethodSet::EMPTY);

        let err = "GET, OPTIONS, FOO".parse::<MethodSet>().unwrap_err();
        assert_eq!(err.name(), "OPTIONS");

        let set: MethodSet = "\x0BGET\x0C,\tput".parse().unwrap();
        assert_eq!(set.to_string(), "GET, PUT");
        let err = "GET,\u{a0}".parse::<MethodSet>().unwrap_err();
        assert_eq!(err.name(), "\u{a0}");
    }

    #[test]
    fn header_value_round_trips() {
        let set = MethodSet::from(Method::Post).union(Method::Put.into());
        let value = set.to_header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "POST, PUT");
        assert_eq!(value.to_str().unwrap().parse::<MethodSet>().unwrap(), set);

        let all = MethodSet::all().to_header_value().unwrap();
        assert_eq!(all.to_str().unwrap(), "POST, GET, PUT, PATCH, HEAD, DELETE");
        assert_eq!(MethodSet::EMPTY.to_header_value().unwrap().to_str().unwrap(), "");
    }

    #[test]
    fn head_only_set_expects_no_body() {
        assert!(!MethodSet::from(Method::Head).expects_body());
        assert!(!MethodSet::EMPTY.expects_body());

        let mut set = MethodSet::from(Method::Head);
        set.extend([Method::Patch]);
        assert!(set.expects_body());
    }
}
