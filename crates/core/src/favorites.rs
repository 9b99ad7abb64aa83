use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// One saved shell command.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub name: String,
    pub description: String,
    pub command: String,
}

/// Top level shape of the favorites JSON file.
#[derive(Deserialize, Debug, Clone)]
pub struct FavoritesStore {
    pub commands: Vec<FavoriteEntry>,
}

/// Which field(s) of an entry are shown to, and searched by, the finder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Name,
    Description,
    All,
}

impl Display for SearchMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            SearchMode::Name => "name",
            SearchMode::Description => "description",
            SearchMode::All => "all",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_mode_default_is_name() {
        assert_eq!(SearchMode::default(), SearchMode::Name);
    }

    #[test]
    fn test_store_deserializes_in_order() {
        let json = r#"{"commands": [
            {"name": "b", "description": "second", "command": "echo b"},
            {"name": "a", "description": "first", "command": "echo a"}
        ]}"#;

        let store: FavoritesStore = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = store.commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
