//! Document conversion services

use anyhow::Context;

/// Render an arbitrary JSON document as YAML
pub fn to_yaml(document: &serde_json::Value) -> anyhow::Result<String> {
    serde_yaml::to_string(document).context("failed to render document as YAML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_yaml_mapping() {
        let document = json!({"name": "apple", "price": 0.5});
        let yaml = to_yaml(&document).unwrap();

        assert!(yaml.contains("name: apple"));
        assert!(yaml.contains("price: 0.5"));
    }

    #[test]
    fn test_to_yaml_nested() {
        let document = json!({
            "item": {"id": 1, "tags": ["fruit", "fresh"]},
            "count": 2
        });
        let yaml = to_yaml(&document).unwrap();

        assert!(yaml.contains("item:"));
        assert!(yaml.contains("id: 1"));
        assert!(yaml.contains("- fruit"));
        assert!(yaml.contains("- fresh"));
        assert!(yaml.contains("count: 2"));
    }

    #[test]
    fn test_to_yaml_scalar() {
        assert_eq!(to_yaml(&json!(42)).unwrap().trim(), "42");
        assert_eq!(to_yaml(&json!("hello")).unwrap().trim(), "hello");
    }
}
