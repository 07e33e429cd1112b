//! Immutable user id → display name snapshot.

use std::collections::HashMap;

/// Snapshot of the workspace roster used to name unlabeled `<@U123>` mentions.
///
/// Never mutated after construction; a roster change builds a new directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for a user id. Accepts the id with or without the `@` sigil.
    pub fn display_name(&self, user_id: &str) -> Option<&str> {
        self.names.get(strip_sigil(user_id)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn strip_sigil(user_id: &str) -> &str {
    user_id.strip_prefix('@').unwrap_or(user_id)
}

impl<K, V> FromIterator<(K, V)> for UserDirectory
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let names = iter
            .into_iter()
            .map(|(id, name)| (strip_sigil(id.as_ref()).to_string(), name.into()))
            .collect();
        Self { names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_with_and_without_sigil() {
        let dir: UserDirectory = [("U1", "thomas"), ("@U2", "ada")].into_iter().collect();
        assert_eq!(dir.display_name("U1"), Some("thomas"));
        assert_eq!(dir.display_name("@U1"), Some("thomas"));
        assert_eq!(dir.display_name("U2"), Some("ada"));
        assert_eq!(dir.display_name("@U3"), None);
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_empty_directory() {
        let dir = UserDirectory::new();
        assert!(dir.is_empty());
        assert_eq!(dir.display_name("@U1"), None);
    }
}
