//! Table-name pluralization.

// Enumerated exceptions checked before the suffix rules
const IRREGULAR: &[(&str, &str)] = &[
    ("category", "categories"),
    ("inventory", "inventories"),
    ("country", "countries"),
    ("person", "people"),
    ("child", "children"),
    ("status", "statuses"),
    ("analysis", "analyses"),
];

/// Pluralize a lowercase word.
///
/// Irregular forms are looked up first; otherwise consonant+`y` becomes
/// `ies`, sibilant endings (`s`, `x`, `z`, `ch`, `sh`) take `es`, and
/// everything else takes `s`.
pub fn pluralize(word: &str) -> String {
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        let penultimate = stem.chars().last();
        let is_vowel = matches!(penultimate, Some('a' | 'e' | 'i' | 'o' | 'u'));
        if penultimate.is_some() && !is_vowel {
            return format!("{stem}ies");
        }
    }

    let sibilant = word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh");
    if sibilant {
        return format!("{word}es");
    }

    format!("{word}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_forms() {
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("inventory"), "inventories");
        assert_eq!(pluralize("country"), "countries");
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("analysis"), "analyses");
    }

    #[test]
    fn test_consonant_y_becomes_ies() {
        assert_eq!(pluralize("company"), "companies");
        assert_eq!(pluralize("city"), "cities");
    }

    #[test]
    fn test_vowel_y_keeps_y() {
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("key"), "keys");
    }

    #[test]
    fn test_sibilant_endings_take_es() {
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("quiz"), "quizes");
        assert_eq!(pluralize("batch"), "batches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("address"), "addresses");
    }

    #[test]
    fn test_default_appends_s() {
        assert_eq!(pluralize("car"), "cars");
        assert_eq!(pluralize("user"), "users");
    }
}
