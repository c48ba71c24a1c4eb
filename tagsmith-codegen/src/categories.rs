//! Declaration records per category.

use tagsmith_core::{Category, compare_case_insensitive, sanitize_identifier};
use tagsmith_registry::NamedRegistryEntry;

use crate::decl::{ClassSpec, ConstDecl, ConstValue, DeclBlock};

/// Build the declaration records for one category.
///
/// Tags and sorting layers are sorted case-insensitively. Layers keep the
/// order they were given in and get two more blocks, masks and numbers,
/// aligned with the names block.
pub fn class_spec(category: Category, entries: &[NamedRegistryEntry]) -> ClassSpec {
    let mut ordered: Vec<&NamedRegistryEntry> = entries.iter().collect();
    if category.is_sorted() {
        ordered.sort_by(|a, b| compare_case_insensitive(&a.name, &b.name));
    }

    let names = DeclBlock::new(
        ordered
            .iter()
            .map(|e| {
                ConstDecl::new(
                    sanitize_identifier(&e.name),
                    &e.name,
                    ConstValue::Str(e.name.clone()),
                )
            })
            .collect(),
    );

    let spec = ClassSpec::new(category).block(names);
    if category != Category::Layers {
        return spec;
    }

    let derived = |suffix: &str, value: fn(u8) -> ConstValue| {
        DeclBlock::new(
            ordered
                .iter()
                .map(|e| {
                    ConstDecl::new(
                        format!("{}{}", sanitize_identifier(&e.name), suffix),
                        &e.name,
                        value(e.index.unwrap_or_default()),
                    )
                })
                .collect(),
        )
    };

    spec.block(derived("Mask", |index| ConstValue::Mask { index }))
        .block(derived("Number", ConstValue::Number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(category: Category, names: &[&str]) -> Vec<NamedRegistryEntry> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| NamedRegistryEntry {
                category,
                name: name.to_string(),
                index: (category == Category::Layers).then_some(i as u8),
            })
            .collect()
    }

    fn identifiers(block: &DeclBlock) -> Vec<&str> {
        block.identifiers().collect()
    }

    #[test]
    fn test_tags_sorted_case_insensitively() {
        let spec = class_spec(Category::Tags, &entries(Category::Tags, &["Enemy", "player", "NPC"]));

        assert_eq!(spec.blocks.len(), 1);
        assert_eq!(spec.name, "Tags");
        assert_eq!(
            spec.blocks[0].decls,
            vec![
                ConstDecl::new("Enemy", "Enemy", ConstValue::Str("Enemy".into())),
                ConstDecl::new("NPC", "NPC", ConstValue::Str("NPC".into())),
                ConstDecl::new("player", "player", ConstValue::Str("player".into())),
            ]
        );
    }

    #[test]
    fn test_sorting_layers_sorted() {
        let spec = class_spec(
            Category::SortingLayers,
            &entries(Category::SortingLayers, &["Foreground", "background", "Default"]),
        );
        assert_eq!(
            identifiers(&spec.blocks[0]),
            ["background", "Default", "Foreground"]
        );
    }

    #[test]
    fn test_sort_ignores_input_order() {
        let a = class_spec(Category::Tags, &entries(Category::Tags, &["b", "C", "a"]));
        let b = class_spec(Category::Tags, &entries(Category::Tags, &["C", "a", "b"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_layers_keep_registry_order() {
        let spec = class_spec(
            Category::Layers,
            &entries(Category::Layers, &["Default", "Water", "UI"]),
        );

        assert_eq!(spec.blocks.len(), 3);
        assert_eq!(identifiers(&spec.blocks[0]), ["Default", "Water", "UI"]);
        assert_eq!(
            identifiers(&spec.blocks[1]),
            ["DefaultMask", "WaterMask", "UIMask"]
        );
        assert_eq!(
            identifiers(&spec.blocks[2]),
            ["DefaultNumber", "WaterNumber", "UINumber"]
        );

        let masks: Vec<_> = spec.blocks[1]
            .decls
            .iter()
            .map(|d| match d.value {
                ConstValue::Mask { index } => ConstValue::mask_value(index),
                _ => panic!("expected mask"),
            })
            .collect();
        assert_eq!(masks, [1, 2, 4]);

        let numbers: Vec<_> = spec.blocks[2].decls.iter().map(|d| d.value.clone()).collect();
        assert_eq!(
            numbers,
            [
                ConstValue::Number(0),
                ConstValue::Number(1),
                ConstValue::Number(2)
            ]
        );
    }

    #[test]
    fn test_layer_blocks_are_index_aligned() {
        let layers = vec![
            NamedRegistryEntry {
                category: Category::Layers,
                name: "Ignore Raycast".into(),
                index: Some(2),
            },
            NamedRegistryEntry {
                category: Category::Layers,
                name: "Water".into(),
                index: Some(4),
            },
        ];
        let spec = class_spec(Category::Layers, &layers);

        for (i, entry) in layers.iter().enumerate() {
            for block in &spec.blocks {
                assert_eq!(block.decls[i].source_name, entry.name);
            }
        }
        assert_eq!(spec.blocks[0].decls[0].identifier, "IgnoreRaycast");
        assert_eq!(spec.blocks[1].decls[1].value, ConstValue::Mask { index: 4 });
        assert_eq!(spec.blocks[2].decls[1].value, ConstValue::Number(4));
    }

    #[test]
    fn test_empty_category() {
        let spec = class_spec(Category::Tags, &[]);
        assert_eq!(spec.blocks.len(), 1);
        assert!(spec.blocks[0].is_empty());
    }
}
