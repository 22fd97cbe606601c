//! Dotted-path lookup over the configuration document
//!
//! Consumers address values as `group.field` (e.g.
//! `content_creation.min_word_count`). Lookup goes against the raw document
//! first, so keys the typed schema does not know about remain reachable.

use serde_yaml::Value;

use crate::config::schema::BlogConfig;

impl BlogConfig {
    /// Get the value at a dotted path, if present
    pub fn get(&self, dotted: &str) -> Option<Value> {
        if let Some(value) = lookup(&self.document, dotted) {
            return Some(value.clone());
        }

        // Keys absent from the document may still have typed defaults
        let typed = serde_yaml::to_value(self).ok()?;
        lookup(&typed, dotted).cloned()
    }

    /// Get the value at a dotted path, or the supplied default when absent
    pub fn get_or(&self, dotted: &str, default: Value) -> Value {
        self.get(dotted).unwrap_or(default)
    }
}

/// Walk a dotted path through a YAML value
///
/// Mapping keys are matched literally; a path segment that parses as an
/// index steps into sequences.
pub fn lookup<'a>(value: &'a Value, dotted: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in dotted.split('.') {
        if segment.is_empty() {
            return None;
        }
        current = match current {
            Value::Mapping(map) => map.get(Value::String(segment.to_string()))?,
            Value::Sequence(seq) => seq.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::lookup;
    use crate::config::schema::BlogConfig;
    use serde_yaml::Value;

    #[test]
    fn get_returns_stored_values() {
        let config = BlogConfig::from_yaml_str(
            "content_creation:\n  min_word_count: 800\n  max_word_count: 1600\n",
        )
        .unwrap();

        assert_eq!(
            config.get("content_creation.min_word_count"),
            Some(Value::Number(800.into()))
        );
    }

    #[test]
    fn get_or_falls_back_for_unset_api_key() {
        let config = BlogConfig::from_yaml_str("blog:\n  title: \"T\"\n").unwrap();

        let serp = config.get_or("api_keys.serp", Value::String(String::new()));
        assert_eq!(serp, Value::String(String::new()));
    }

    #[test]
    fn get_returns_literal_api_key_when_set() {
        let config = BlogConfig::from_yaml_str("api_keys:\n  serp: \"abc123\"\n").unwrap();

        assert_eq!(
            config.get("api_keys.serp"),
            Some(Value::String("abc123".to_string()))
        );
    }

    #[test]
    fn unknown_keys_in_document_stay_reachable() {
        let config =
            BlogConfig::from_yaml_str("experimental:\n  new_flag: true\n").unwrap();

        assert_eq!(config.get("experimental.new_flag"), Some(Value::Bool(true)));
        assert_eq!(config.get("experimental.other"), None);
    }

    #[test]
    fn lookup_steps_into_sequences() {
        let doc: Value =
            serde_yaml::from_str("jekyll:\n  plugins:\n    - jekyll-feed\n    - jekyll-seo-tag\n")
                .unwrap();

        assert_eq!(
            lookup(&doc, "jekyll.plugins.1"),
            Some(&Value::String("jekyll-seo-tag".to_string()))
        );
    }

    #[test]
    fn missing_paths_return_none() {
        let config = BlogConfig::from_yaml_str("blog:\n  title: \"T\"\n").unwrap();
        assert_eq!(config.get("blog.title.deeper"), None);
        assert_eq!(config.get(""), None);
    }
}
