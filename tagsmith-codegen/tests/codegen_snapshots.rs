//! Snapshot tests for the generated C# classes.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use tagsmith_codegen::{GenerateOptions, Generator};
use tagsmith_core::Category;
use tagsmith_manifest::{Manifest, MaskStyle};
use tagsmith_registry::InMemoryRegistry;

fn unity_defaults() -> InMemoryRegistry {
    InMemoryRegistry::new()
        .tags([
            "Untagged",
            "Respawn",
            "Finish",
            "EditorOnly",
            "MainCamera",
            "Player",
            "GameController",
            "enemy spawner",
        ])
        .layer(0, "Default")
        .layer(1, "TransparentFX")
        .layer(2, "Ignore Raycast")
        .layer(4, "Water")
        .layer(5, "UI")
        .layer(8, "Post Processing")
        .sorting_layers(["Default", "Foreground", "background"])
}

fn render(generator: &Generator<InMemoryRegistry>, category: Category) -> String {
    generator.build(category).expect("category should build").content
}

#[test]
fn test_tags_class() {
    let generator = Generator::new(unity_defaults());
    insta::assert_snapshot!("tags_class", render(&generator, Category::Tags));
}

#[test]
fn test_layers_class() {
    let generator = Generator::new(unity_defaults());
    insta::assert_snapshot!("layers_class", render(&generator, Category::Layers));
}

#[test]
fn test_sorting_layers_class() {
    let generator = Generator::new(unity_defaults());
    insta::assert_snapshot!(
        "sorting_layers_class",
        render(&generator, Category::SortingLayers)
    );
}

#[test]
fn test_layers_class_with_literal_masks_and_spaces() {
    let manifest: Manifest = r#"
        [output]
        indent = 4
        mask_style = "literal"
    "#
    .parse()
    .expect("manifest should parse");
    let options = GenerateOptions::from_manifest(&manifest);
    assert_eq!(options.mask_style, MaskStyle::Literal);

    let registry = InMemoryRegistry::new()
        .layer(0, "Default")
        .layer(5, "UI")
        .layer(31, "Last");
    let generator = Generator::new(registry).with_options(options);
    insta::assert_snapshot!(
        "layers_class_literal",
        render(&generator, Category::Layers)
    );
}
