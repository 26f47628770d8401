use std::fmt;

/// Named captures made by `bind`, read back by `gather`.
///
/// Backed by a persistent map: adding a binding yields a new map and leaves
/// the original intact, so a branch that fails and backtracks can never see
/// captures made by another branch.
pub struct Bindings<V = String> {
    map: im::HashMap<String, V>,
}

impl<V: Clone> Bindings<V> {
    pub fn new() -> Self {
        Self {
            map: im::HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A copy with `name` bound to `value`, replacing any earlier binding.
    #[must_use]
    pub fn with(&self, name: &str, value: V) -> Self {
        let mut map = self.map.clone();
        map.insert(name.to_string(), value);
        Self { map }
    }
}

impl<V: Clone> Default for Bindings<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for Bindings<V> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<V: Clone + PartialEq> PartialEq for Bindings<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<V: Clone + fmt::Debug> fmt::Debug for Bindings<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        f.debug_map().entries(entries).finish()
    }
}

/// A point in the text being parsed.
///
/// Holds the unparsed remainder of the input, how many characters have been
/// consumed so far, and the captures bound on the way. States are values:
/// every move produces a new state and leaves the old one usable for
/// backtracking.
pub struct ParseState<'a, V = String> {
    input: &'a str,
    position: usize,
    bindings: Bindings<V>,
}

impl<'a, V: Clone> ParseState<'a, V> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            bindings: Bindings::new(),
        }
    }

    /// The unparsed remainder of the input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        self.input
    }

    /// Characters consumed since the start of the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn bindings(&self) -> &Bindings<V> {
        &self.bindings
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input.chars().next()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.input.is_empty()
    }

    /// Moves past `prefix`, which must be a prefix of the remaining input.
    /// Anything else leaves the state where it is.
    #[must_use]
    pub fn advance(self, prefix: &str) -> Self {
        match self.input.strip_prefix(prefix) {
            Some(rest) => Self {
                input: rest,
                position: self.position + prefix.chars().count(),
                bindings: self.bindings,
            },
            None => self,
        }
    }

    #[must_use]
    pub fn bind(self, name: &str, value: V) -> Self {
        Self {
            bindings: self.bindings.with(name, value),
            ..self
        }
    }

    /// Ends a capture scope: same cursor, no bindings.
    #[must_use]
    pub fn without_bindings(self) -> Self {
        Self {
            bindings: Bindings::new(),
            ..self
        }
    }
}

impl<'a, V: Clone> Clone for ParseState<'a, V> {
    fn clone(&self) -> Self {
        Self {
            input: self.input,
            position: self.position,
            bindings: self.bindings.clone(),
        }
    }
}

impl<'a, V: Clone + PartialEq> PartialEq for ParseState<'a, V> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.input == other.input
            && self.bindings == other.bindings
    }
}

impl<'a, V: Clone + fmt::Debug> fmt::Debug for ParseState<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ParseState")
            .field("input", &self.input)
            .field("position", &self.position)
            .field("bindings", &self.bindings)
            .finish()
    }
}
