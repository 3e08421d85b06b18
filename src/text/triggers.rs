//! The table of emote names that the rewriter looks for.

use std::fmt;

use case_insensitive_hashmap::CaseInsensitiveHashMap;

/// Maps emote names to their position among the plugin's icons.
///
/// Names are stored in lowercase and are unique regardless of case. A name's index is the order
/// in which it was inserted, which is also the order of the icons appended to the client's icon
/// table, so `base_id + index` is the emote's icon ID.
pub struct TriggerDictionary {
    /// Emote names in insertion order.
    names: Vec<String>,

    /// Indices into `names`, keyed by name.
    indices: CaseInsensitiveHashMap<usize>,
}

impl TriggerDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> TriggerDictionary {
        TriggerDictionary {
            names: vec![],
            indices: CaseInsensitiveHashMap::new(),
        }
    }

    /// Adds `name` to the end of the dictionary. Returns false (and leaves the dictionary as it
    /// was) if a name equal to it ignoring case is already present.
    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref().to_lowercase();
        let next_index = self.names.len();

        let index = *self.indices.entry(name.clone()).or_insert(next_index);

        if index != next_index {
            return false;
        }

        self.names.push(name);
        true
    }

    /// Returns the index of the emote called `name`, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the name stored at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns an iterator over the names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for TriggerDictionary {
    fn default() -> Self {
        TriggerDictionary::new()
    }
}

impl fmt::Debug for TriggerDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.names).finish()
    }
}

impl<S> FromIterator<S> for TriggerDictionary
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = TriggerDictionary::new();

        for name in iter {
            dictionary.insert(name);
        }

        dictionary
    }
}
