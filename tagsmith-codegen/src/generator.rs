//! Registry to constants files.

use std::path::{Path, PathBuf};

use tagsmith_core::{AssetNotifier, Category, GENERATED_HEADER, GeneratedFile, Result, WriteResult};
use tagsmith_manifest::{Manifest, MaskStyle};
use tagsmith_registry::{Registry, read_entries};

use crate::{
    GeneratedClass,
    builder::Indent,
    categories::class_spec,
    csharp::CSharpRenderer,
    decl::ClassSpec,
    identifier::IdentifierPolicy,
};

/// Rendering and validation settings.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub indent: Indent,
    pub mask_style: MaskStyle,
    pub policy: IdentifierPolicy,
    pub header: String,
}

impl GenerateOptions {
    /// Options described by a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            indent: manifest.output.indent.into(),
            mask_style: manifest.output.mask_style,
            policy: IdentifierPolicy::from_strict(manifest.validation.strict),
            header: GENERATED_HEADER.to_string(),
        }
    }

    /// Replace the identifier policy.
    pub fn with_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            mask_style: MaskStyle::default(),
            policy: IdentifierPolicy::default(),
            header: GENERATED_HEADER.to_string(),
        }
    }
}

/// Outcome of one category during [`Generator::generate`].
#[derive(Debug)]
pub struct CategoryOutcome {
    pub category: Category,
    /// Destination of the generated file.
    pub path: PathBuf,
    pub result: Result<WriteResult>,
}

/// Outcome of a whole generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub outcomes: Vec<CategoryOutcome>,
}

impl GenerateResult {
    /// Whether every category was generated.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Categories that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CategoryOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Generates one constants class per registry category.
///
/// Each category is read, built, and written independently: a failure in one
/// never produces a partial file and never affects the others.
pub struct Generator<R> {
    registry: R,
    options: GenerateOptions,
}

impl<R: Registry> Generator<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    /// Read the registry and build the checked declaration records.
    pub fn class_spec(&self, category: Category) -> Result<ClassSpec> {
        let entries = read_entries(&self.registry, category)?;
        let spec = class_spec(category, &entries).header(self.options.header.clone());
        self.options.policy.check(&spec)?;
        Ok(spec)
    }

    /// Build the complete file for one category.
    pub fn build(&self, category: Category) -> Result<GeneratedClass> {
        let spec = self.class_spec(category)?;
        let content = CSharpRenderer::new(self.options.indent, self.options.mask_style).render(&spec);
        Ok(GeneratedClass { category, content })
    }

    /// Build every category without writing anything.
    pub fn build_all(&self) -> Vec<(Category, Result<GeneratedClass>)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.build(category)))
            .collect()
    }

    /// Build and write every category into `output_dir`.
    ///
    /// Every file is rewritten, even when its content is the same, and the
    /// notifier hears about each one.
    pub fn generate(&self, output_dir: &Path, notifier: &dyn AssetNotifier) -> GenerateResult {
        let outcomes = Category::ALL
            .into_iter()
            .map(|category| {
                let path = output_dir.join(category.file_name());
                let result = self.generate_one(category, output_dir, notifier);
                match &result {
                    Ok(written) => tracing::debug!(%category, ?written, "generated"),
                    Err(e) => tracing::warn!(%category, error = %e, "generation failed"),
                }
                CategoryOutcome {
                    category,
                    path,
                    result,
                }
            })
            .collect();

        GenerateResult { outcomes }
    }

    fn generate_one(
        &self,
        category: Category,
        output_dir: &Path,
        notifier: &dyn AssetNotifier,
    ) -> Result<WriteResult> {
        let file = self.build(category)?;
        let written = file.write(output_dir)?;
        notifier.asset_changed(&file.path(output_dir))?;
        Ok(written)
    }
}
