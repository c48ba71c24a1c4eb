//! C# rendering of declaration records.

use tagsmith_core::escape_string_literal;
use tagsmith_manifest::MaskStyle;

use crate::{
    builder::{CodeBuilder, Indent},
    decl::{ClassSpec, ConstDecl, ConstValue},
};

/// Renders a [`ClassSpec`] as a `public abstract class` of constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer {
    indent: Indent,
    mask_style: MaskStyle,
}

impl CSharpRenderer {
    pub fn new(indent: Indent, mask_style: MaskStyle) -> Self {
        Self { indent, mask_style }
    }

    /// Render the whole file.
    pub fn render(&self, spec: &ClassSpec) -> String {
        let builder = match &spec.header {
            Some(header) => CodeBuilder::new(self.indent).comment(header),
            None => CodeBuilder::new(self.indent),
        };

        builder
            .block_with_close(
                &format!("public abstract class {} {{", spec.name),
                "}",
                |b| {
                    b.each(spec.blocks.iter().enumerate(), |b, (i, block)| {
                        b.when(i > 0, CodeBuilder::blank)
                            .each(&block.decls, |b, decl| b.line(&self.declaration(decl)))
                    })
                },
            )
            .build()
    }

    /// Render a single declaration without indentation.
    pub fn declaration(&self, decl: &ConstDecl) -> String {
        let (ty, value) = match &decl.value {
            ConstValue::Str(s) => ("string", format!("\"{}\"", escape_string_literal(s))),
            ConstValue::Mask { index } => ("int", self.mask(*index)),
            ConstValue::Number(index) => ("int", index.to_string()),
        };
        format!("public const {} {} = {};", ty, decl.identifier, value)
    }

    fn mask(&self, index: u8) -> String {
        match self.mask_style {
            MaskStyle::Shift if index == 0 => "1".to_string(),
            MaskStyle::Shift => format!("1 << {}", index),
            MaskStyle::Literal => ConstValue::mask_value(index).to_string(),
        }
    }
}
