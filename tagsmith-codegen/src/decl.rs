//! Declaration records.
//!
//! A generated file is described as a [`ClassSpec`]: a class name, a header
//! marker, and ordered blocks of [`ConstDecl`]s. Renderers turn a class into
//! text; nothing here knows about syntax.

use tagsmith_core::Category;

/// Value of a generated constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstValue {
    /// The raw registry name.
    Str(String),
    /// Bitmask of a layer slot.
    Mask { index: u8 },
    /// Index of a layer slot.
    Number(u8),
}

impl ConstValue {
    /// Bitmask for a layer slot: `1` for slot 0, `1 << index` otherwise.
    ///
    /// Slot 31 wraps to `i32::MIN`, matching a 32-bit signed layer mask.
    /// Slots past 31 have no bit and give `0`.
    pub fn mask_value(index: u8) -> i32 {
        1i32.checked_shl(u32::from(index)).unwrap_or(0)
    }
}

/// A single named constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDecl {
    /// Identifier as it appears in the generated code.
    pub identifier: String,
    /// Registry name the identifier was derived from.
    pub source_name: String,
    pub value: ConstValue,
}

impl ConstDecl {
    pub fn new(
        identifier: impl Into<String>,
        source_name: impl Into<String>,
        value: ConstValue,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            source_name: source_name.into(),
            value,
        }
    }
}

/// A group of declarations rendered together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclBlock {
    pub decls: Vec<ConstDecl>,
}

impl DeclBlock {
    pub fn new(decls: Vec<ConstDecl>) -> Self {
        Self { decls }
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.decls.iter().map(|d| d.identifier.as_str())
    }
}

/// Everything needed to render one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSpec {
    pub category: Category,
    pub name: String,
    /// Marker comment placed above the class.
    pub header: Option<String>,
    /// Blocks in output order, separated by blank lines.
    pub blocks: Vec<DeclBlock>,
}

impl ClassSpec {
    /// Create an empty spec named after the category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            name: category.class_name().to_string(),
            header: None,
            blocks: Vec::new(),
        }
    }

    /// Set the header marker.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Append a block.
    pub fn block(mut self, block: DeclBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// All declarations, in output order.
    pub fn decls(&self) -> impl Iterator<Item = &ConstDecl> {
        self.blocks.iter().flat_map(|b| b.decls.iter())
    }
}
