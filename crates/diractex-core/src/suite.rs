use crate::error::Result;
use crate::invocation::Invocation;
use std::io::Read;
use std::path::Path;

/// How each entry of a suite is laid out in the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLayout {
    /// Description line, the equation, then a blank line.
    Described,
    /// Just the equation.
    EquationOnly,
}

/// A named, ordered batch of invocations rendered into one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    pub name: String,
    pub layout: EntryLayout,
    pub invocations: Vec<Invocation>,
}

impl Suite {
    pub fn new(name: impl Into<String>, layout: EntryLayout, invocations: Vec<Invocation>) -> Self {
        Self {
            name: name.into(),
            layout,
            invocations,
        }
    }

    /// Reads a JSON array of invocations. Entries use the [`EntryLayout::Described`] layout.
    pub fn from_json_reader(name: impl Into<String>, reader: impl Read) -> Result<Self> {
        let invocations: Vec<Invocation> = serde_json::from_reader(reader)?;
        Ok(Self::new(name, EntryLayout::Described, invocations))
    }

    /// Loads a suite file; the suite is named after the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "suite".to_string());
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(name, std::io::BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}
