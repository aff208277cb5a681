//! Serializes a rendered `Document` into a `.docx` file via `docx-rs`.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    LineSpacing, NumberFormat, Numbering, NumberingId, PageMargin, SpecialIndentType, Start, Tab,
    TabValueType,
};

use crate::render::style::{FONT_FAMILY, TWIPS_PER_INCH, TWIPS_PER_POINT};
use crate::render::{Alignment, Document, Paragraph, Run};

pub const DOCX_EXTENSION: &str = "docx";

/// Numbering definition shared by every bulleted paragraph. `docx-rs` always
/// emits a decimal list under id 1, so bullets take the next free id.
const BULLET_NUMBERING_ID: usize = 2;

pub fn to_docx_bytes(doc: &Document) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    build_docx(doc)
        .build()
        .pack(&mut buffer)
        .map_err(|e| anyhow!("Failed to pack docx: {e}"))?;
    Ok(buffer.into_inner())
}

pub fn write_docx(doc: &Document, path: &Path) -> Result<()> {
    let bytes = to_docx_bytes(doc)?;
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

fn build_docx(doc: &Document) -> Docx {
    let margin = inches_to_twips(doc.margin_in);

    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new("•"),
                LevelJc::new("left"),
            )
            .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
        ))
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for paragraph in &doc.paragraphs {
        docx = docx.add_paragraph(convert_paragraph(paragraph));
    }
    docx
}

fn convert_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    let mut out = docx_rs::Paragraph::new();

    if paragraph.alignment == Alignment::Center {
        out = out.align(AlignmentType::Center);
    }
    if paragraph.bullet {
        out = out.numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
    }
    if let Some(position) = paragraph.right_tab_in {
        out = out.add_tab(
            Tab::new()
                .val(TabValueType::Right)
                .pos(inches_to_twips(position) as usize),
        );
    }
    if let Some(spacing) = paragraph.spacing {
        out = out.line_spacing(
            LineSpacing::new()
                .before(points_to_twips(spacing.before_pt))
                .after(points_to_twips(spacing.after_pt)),
        );
    }

    for run in &paragraph.runs {
        out = out.add_run(convert_run(run));
    }
    out
}

fn convert_run(run: &Run) -> docx_rs::Run {
    let mut out = docx_rs::Run::new()
        .fonts(
            docx_rs::RunFonts::new()
                .ascii(FONT_FAMILY)
                .hi_ansi(FONT_FAMILY)
                .east_asia(FONT_FAMILY)
                .cs(FONT_FAMILY),
        )
        // half-points
        .size(usize::from(run.size_pt) * 2);

    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    if run.underline {
        out = out.underline("single");
    }

    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        for (j, segment) in line.split('\t').enumerate() {
            if j > 0 {
                out = out.add_tab();
            }
            if !segment.is_empty() {
                out = out.add_text(segment);
            }
        }
    }
    out
}

fn inches_to_twips(inches: f32) -> i32 {
    (inches * TWIPS_PER_INCH).round() as i32
}

fn points_to_twips(points: f32) -> u32 {
    (points * TWIPS_PER_POINT).round() as u32
}
