use crate::render::style::{BODY_SIZE_PT, COVER_LETTER_MARGIN_IN};
use crate::render::{Document, Paragraph, Run};

/// Lays out the cover letter as a single paragraph. Newlines in the text are
/// kept as line breaks inside that paragraph.
pub fn render_cover_letter(text: &str) -> Document {
    let mut doc = Document::new(COVER_LETTER_MARGIN_IN);
    doc.push(Paragraph::new().run(Run::new(text, BODY_SIZE_PT)));
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_paragraph_with_embedded_breaks() {
        let text = "Dear Team, I am excited.\n\nSincerely,\nTommy Delta";
        let doc = render_cover_letter(text);

        assert_eq!(doc.margin_in, 1.0);
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.paragraphs[0].text(), text);

        let run = &doc.paragraphs[0].runs[0];
        assert_eq!(run.size_pt, 12);
        assert!(!run.bold && !run.italic);
    }
}
