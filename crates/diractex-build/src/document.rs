use diractex_core::EntryLayout;
use std::io::{self, Write};
use std::path::PathBuf;

/// Document header shared by every generated file.
pub const PREAMBLE: &str = "\\documentclass[aps,prd,a4paper]{revtex4-2}
\\usepackage[T1]{fontenc}
\\usepackage{underscore}
\\usepackage{amsmath}
\\usepackage{amssymb}

\\begin{document}
";

pub const END_DOCUMENT: &str = "\\end{document}";

/// Where a document is written and the job name the typesetter is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexTarget {
    /// Directory the typesetter runs in.
    pub dir: PathBuf,
    /// File name including the `.tex` suffix.
    pub file_name: String,
    /// File name without the `.tex` suffix.
    pub job_name: String,
}

impl TexTarget {
    /// `tests` becomes `tests.tex` with job `tests`; `out.tex` keeps its name with job `out`.
    pub fn from_name(name: &str) -> Self {
        Self::in_dir(".", name)
    }

    pub fn in_dir(dir: impl Into<PathBuf>, name: &str) -> Self {
        let (file_name, job_name) = match name.strip_suffix(".tex") {
            Some(stem) => (name.to_string(), stem.to_string()),
            None => (format!("{name}.tex"), name.to_string()),
        };
        Self {
            dir: dir.into(),
            file_name,
            job_name,
        }
    }

    pub fn tex_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Streams a LaTeX document: preamble on creation, entries, `\end{document}` on finish.
///
/// The underlying handle is owned by the writer, so it is closed whenever the
/// writer goes out of scope. If a batch stops half-way the file is left
/// truncated after the last complete entry.
pub struct DocumentWriter<W: Write> {
    out: W,
    entries: usize,
}

impl<W: Write> DocumentWriter<W> {
    pub fn begin(mut out: W) -> io::Result<Self> {
        out.write_all(PREAMBLE.as_bytes())?;
        Ok(Self { out, entries: 0 })
    }

    pub fn write_entry(
        &mut self,
        layout: EntryLayout,
        description: &str,
        equation: &str,
    ) -> io::Result<()> {
        match layout {
            EntryLayout::Described => write!(self.out, "{description}\n{equation}\n\n")?,
            EntryLayout::EquationOnly => writeln!(self.out, "{equation}")?,
        }
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Closes the document body and flushes; returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(END_DOCUMENT.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}
