//! Document rendering.
//!
//! Layout is a pure function from the normalized model output to a small
//! document tree (`Document` → `Paragraph` → `Run`). The tree is what the
//! layout rules are written against and what the tests inspect; `docx`
//! serializes it to a Word file as a separate step.

pub mod cover_letter;
pub mod docx;
pub mod resume;
pub mod style;

pub use cover_letter::render_cover_letter;
pub use resume::render_resume;

/// A rendered document: page geometry plus an ordered list of paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Uniform margin on all four sides, in inches.
    pub margin_in: f32,
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new(margin_in: f32) -> Self {
        Self {
            margin_in,
            paragraphs: Vec::new(),
        }
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Concatenated run text of every paragraph, one entry per paragraph.
    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        self.paragraphs.iter().map(Paragraph::text).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Extra vertical space around a paragraph, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub before_pt: f32,
    pub after_pt: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Alignment,
    /// Rendered as a list bullet.
    pub bullet: bool,
    /// Right-aligned tab stop position, in inches from the left margin.
    pub right_tab_in: Option<f32>,
    pub spacing: Option<Spacing>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty spacer paragraph.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn bulleted(run: Run) -> Self {
        Self {
            runs: vec![run],
            bullet: true,
            ..Self::default()
        }
    }

    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn right_tab(mut self, position_in: f32) -> Self {
        self.right_tab_in = Some(position_in);
        self
    }

    pub fn spacing(mut self, before_pt: f32, after_pt: f32) -> Self {
        self.spacing = Some(Spacing {
            before_pt,
            after_pt,
        });
        self
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A span of uniformly styled text. `\n` inside `text` is a line break
/// within the paragraph, `\t` advances to the next tab stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub size_pt: u8,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Run {
    pub fn new(text: impl Into<String>, size_pt: u8) -> Self {
        Self {
            text: text.into(),
            size_pt,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}
