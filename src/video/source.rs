//! Combined shader source files.
//!
//! A single text file carries both stages. A line containing `#shader` switches
//! the section that the following lines belong to:
//!
//! ```glsl
//! #shader vertex
//! #version 330 core
//! layout(location = 0) in vec4 position;
//! void main() { gl_Position = position; }
//!
//! #shader fragment
//! #version 330 core
//! uniform vec4 u_Color;
//! layout(location = 0) out vec4 color;
//! void main() { color = u_Color; }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use super::errors::{Error, Result};

/// The programmable stages of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

const MARKER: &str = "#shader";

/// The vertex and fragment source text of one shader program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramSource {
    pub fn new<T1, T2>(vertex: T1, fragment: T2) -> Self
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        ShaderProgramSource {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Splits a combined shader file into its sections.
    ///
    /// Marker lines are never part of the output. A marker that names neither
    /// stage keeps the current section. Lines before the first marker are dropped.
    pub fn parse(text: &str) -> Self {
        let mut source = ShaderProgramSource::default();
        let mut stage = None;

        for line in text.lines() {
            if line.contains(MARKER) {
                if line.contains("vertex") {
                    stage = Some(ShaderStage::Vertex);
                } else if line.contains("fragment") {
                    stage = Some(ShaderStage::Fragment);
                }

                continue;
            }

            if let Some(v) = stage {
                let section = source.section_mut(v);
                section.push_str(line);
                section.push('\n');
            }
        }

        source
    }

    /// Reads and splits a combined shader file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&text))
    }

    /// Returns the source of `stage`.
    pub fn section(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    fn section_mut(&mut self, stage: ShaderStage) -> &mut String {
        match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
        }
    }

    /// Checks that both stages carry some source text.
    pub fn validate(&self) -> Result<()> {
        for &stage in &[ShaderStage::Vertex, ShaderStage::Fragment] {
            if self.section(stage).trim().is_empty() {
                return Err(Error::ShaderSectionMissing(stage));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split() {
        let text = "#shader vertex\nvoid main() {}\n#shader fragment\nout vec4 color;\nvoid main() {}\n";
        let source = ShaderProgramSource::parse(text);
        assert_eq!(source.vertex, "void main() {}\n");
        assert_eq!(source.fragment, "out vec4 color;\nvoid main() {}\n");
        assert!(source.validate().is_ok());
    }

    #[test]
    fn fragment_first() {
        let text = "#shader fragment\nB\n#shader vertex\nA\n";
        let source = ShaderProgramSource::parse(text);
        assert_eq!(source.section(ShaderStage::Vertex), "A\n");
        assert_eq!(source.section(ShaderStage::Fragment), "B\n");
    }

    #[test]
    fn preamble_is_dropped() {
        let source = ShaderProgramSource::parse("// header\n\n#shader vertex\nA\n");
        assert_eq!(source.vertex, "A\n");
        assert_eq!(source.fragment, "");
    }

    #[test]
    fn unknown_marker_keeps_section() {
        let source = ShaderProgramSource::parse("#shader vertex\nA\n#shader geometry\nB\n");
        assert_eq!(source.vertex, "A\nB\n");
        assert_eq!(source.fragment, "");
    }

    #[test]
    fn repeated_sections_append() {
        let source = ShaderProgramSource::parse("#shader vertex\nA\n#shader vertex\nB\n");
        assert_eq!(source.vertex, "A\nB\n");
    }

    #[test]
    fn crlf() {
        let source = ShaderProgramSource::parse("#shader vertex\r\nA\r\n#shader fragment\r\nB\r\n");
        assert_eq!(source.vertex, "A\n");
        assert_eq!(source.fragment, "B\n");
    }

    #[test]
    fn missing_section() {
        let source = ShaderProgramSource::parse("#shader vertex\nA\n#shader fragment\n   \n");
        match source.validate() {
            Err(Error::ShaderSectionMissing(ShaderStage::Fragment)) => {}
            v => panic!("unexpected {:?}", v),
        }
    }
}
