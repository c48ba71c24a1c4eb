//! List command report data structures.

use serde_json::{Value, json};
use tagsmith_core::Category;
use tagsmith_registry::NamedRegistryEntry;

use super::output::{Output, Report};

/// Entries of one category as the generator reads them.
#[derive(Debug)]
pub struct CategoryListing {
    pub category: Category,
    pub result: Result<Vec<NamedRegistryEntry>, String>,
}

/// Report data for the registries of a project.
#[derive(Debug)]
pub struct ListReport {
    pub categories: Vec<CategoryListing>,
}

impl ListReport {
    pub fn is_success(&self) -> bool {
        self.categories.iter().all(|c| c.result.is_ok())
    }

    /// JSON object keyed by category; failed categories carry an `error` field.
    pub fn to_json(&self) -> Value {
        let map = self
            .categories
            .iter()
            .map(|listing| {
                let value = match &listing.result {
                    Ok(entries) => json!(entries),
                    Err(e) => json!({ "error": e }),
                };
                (listing.category.as_str().to_string(), value)
            })
            .collect();
        Value::Object(map)
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, listing) in self.categories.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(listing.category.class_name());
            match &listing.result {
                Ok(entries) if entries.is_empty() => out.preformatted("  (none)"),
                Ok(entries) => {
                    for entry in entries {
                        match entry.index {
                            Some(index) => out.list_item(&format!("{:>2} {}", index, entry.name)),
                            None => out.list_item(&entry.name),
                        }
                    }
                }
                Err(e) => out.error(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report() -> ListReport {
        ListReport {
            categories: vec![
                CategoryListing {
                    category: Category::Tags,
                    result: Ok(vec![NamedRegistryEntry {
                        category: Category::Tags,
                        name: "Player".to_string(),
                        index: None,
                    }]),
                },
                CategoryListing {
                    category: Category::Layers,
                    result: Ok(vec![NamedRegistryEntry {
                        category: Category::Layers,
                        name: "Water".to_string(),
                        index: Some(4),
                    }]),
                },
                CategoryListing {
                    category: Category::SortingLayers,
                    result: Err("SortingLayers: registry unavailable: gone".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_render_text() {
        let mut out = BufferOutput::default();
        report().render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Tags:",
                "  - Player",
                "",
                "Layers:",
                "  -  4 Water",
                "",
                "SortingLayers:",
                "error: SortingLayers: registry unavailable: gone",
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let report = report();
        let json = report.to_json();

        assert!(!report.is_success());
        assert_eq!(json["tags"][0]["name"], "Player");
        assert!(json["tags"][0].get("index").is_none());
        assert_eq!(json["layers"][0]["index"], 4);
        assert_eq!(
            json["sorting-layers"]["error"],
            "SortingLayers: registry unavailable: gone"
        );
    }
}
