//! Data model for extracted documentation — format-agnostic.

/// Everything extracted from a single input file.
#[derive(Debug, Default)]
pub struct FileDocumentation {
    /// File name without its directory part, used as the section heading.
    pub file_name: String,
    pub kind: FileKind,
    pub functions: Vec<FunctionDoc>,
    pub variables: Vec<VariableDoc>,
}

impl FileDocumentation {
    /// Files contributing nothing produce no section in the report.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.variables.is_empty()
    }
}

/// Where the documentation came from. Metadata files carry only variables
/// and render without the "Variables" sub-heading.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    #[default]
    Source,
    Metadata,
}

/// A single documented function.
#[derive(Debug, Default)]
pub struct FunctionDoc {
    /// Empty when the declaration line was unrecognized.
    pub name: String,
    /// Free-text lines in encounter order, joined with spaces at render time.
    pub description: Vec<String>,
    /// @param entries in encounter order.
    pub parameters: Vec<ParamDoc>,
    /// @returns entry. Stays unset for a bare `@returns {Type}` with no
    /// trailing description.
    pub returns: Option<ReturnDoc>,
    /// @async
    pub is_async: bool,
    /// @helper_function
    pub helper: bool,
}

/// Parsed @param entry.
#[derive(Debug, PartialEq, Eq)]
pub struct ParamDoc {
    pub name: String,
    pub type_name: String,
    pub description: String,
}

/// Parsed @returns entry.
#[derive(Debug, PartialEq, Eq)]
pub struct ReturnDoc {
    /// Angle brackets are already HTML-escaped at extraction time.
    pub type_name: String,
    pub description: String,
}

/// A documented variable, from an @var block or a metadata entry.
#[derive(Debug, Default)]
pub struct VariableDoc {
    pub name: String,
    pub type_name: String,
    /// Fragments in encounter order, joined with spaces at render time.
    pub description: Vec<String>,
}
