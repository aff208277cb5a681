//! Résumé layout.
//!
//! Section order is fixed: header, summary, education, experience, projects,
//! skills. A section is emitted only when it has something to show.

use crate::models::resume::{ContactInfo, EducationEntry, ExperienceEntry, ProjectEntry, ResumeData};
use crate::render::style::{
    BODY_SIZE_PT, CONTACT_SIZE_PT, LOCATION_TAB_STOP_IN, RESUME_MARGIN_IN,
    SECTION_HEADER_SIZE_PT, SECTION_SPACE_AFTER_PT, SECTION_SPACE_BEFORE_PT, TITLE_SIZE_PT,
};
use crate::render::{Alignment, Document, Paragraph, Run};

/// Lays out the résumé. `skills` is the already flattened skills line.
pub fn render_resume(resume: &ResumeData, skills: Option<&str>) -> Document {
    let mut doc = Document::new(RESUME_MARGIN_IN);

    if let Some(contact) = &resume.contact_info {
        add_header(&mut doc, contact);
    }

    if let Some(summary) = present(&resume.summary) {
        add_section_header(&mut doc, "Professional Summary");
        doc.push(Paragraph::new().run(Run::new(summary, BODY_SIZE_PT)));
    }

    if !resume.education.is_empty() {
        add_section_header(&mut doc, "Education");
        for entry in &resume.education {
            add_education(&mut doc, entry);
        }
    }

    if !resume.experience.is_empty() {
        add_section_header(&mut doc, "Experience");
        for entry in &resume.experience {
            add_experience(&mut doc, entry);
        }
    }

    if !resume.projects.is_empty() {
        add_section_header(&mut doc, "Projects");
        for entry in &resume.projects {
            add_project(&mut doc, entry);
        }
    }

    if let Some(skills) = skills.filter(|s| !s.is_empty()) {
        add_section_header(&mut doc, "Skills");
        doc.push(Paragraph::new().run(Run::new(skills, BODY_SIZE_PT)));
    }

    doc
}

/// Centered name and contact line, then a spacer.
fn add_header(doc: &mut Document, contact: &ContactInfo) {
    let mut emitted = false;

    if let Some(name) = present(&contact.name) {
        doc.push(
            Paragraph::new()
                .align(Alignment::Center)
                .run(Run::new(name.to_uppercase(), TITLE_SIZE_PT).bold()),
        );
        emitted = true;
    }

    let parts = contact.contact_parts();
    if !parts.is_empty() {
        doc.push(
            Paragraph::new()
                .align(Alignment::Center)
                .run(Run::new(parts.join(" | "), CONTACT_SIZE_PT)),
        );
        emitted = true;
    }

    if emitted {
        doc.push(Paragraph::blank());
    }
}

fn add_section_header(doc: &mut Document, title: &str) {
    doc.push(
        Paragraph::new()
            .spacing(SECTION_SPACE_BEFORE_PT, SECTION_SPACE_AFTER_PT)
            .run(
                Run::new(title.to_uppercase(), SECTION_HEADER_SIZE_PT)
                    .bold()
                    .underline(),
            ),
    );
}

fn add_education(doc: &mut Document, entry: &EducationEntry) {
    let mut line = Paragraph::new().run(Run::new(display(&entry.institution), BODY_SIZE_PT).bold());
    if let Some(location) = present(&entry.location) {
        line = line
            .run(Run::new(format!(" \t{location}"), BODY_SIZE_PT))
            .right_tab(LOCATION_TAB_STOP_IN);
    }
    doc.push(line);

    let mut degree = Paragraph::new().run(Run::new(display(&entry.degree), BODY_SIZE_PT).italic());
    if let Some(date) = present(&entry.graduation_date) {
        degree = degree.run(Run::new(format!(" -- {date}"), BODY_SIZE_PT));
    }
    doc.push(degree);

    add_bullets(doc, &entry.details);
}

fn add_experience(doc: &mut Document, entry: &ExperienceEntry) {
    doc.push(Paragraph::new().run(Run::new(display(&entry.company), BODY_SIZE_PT).bold()));

    let mut title = Paragraph::new().run(Run::new(display(&entry.title), BODY_SIZE_PT).italic());
    if let Some(dates) = present(&entry.dates) {
        title = title.run(Run::new(format!(" ({dates})"), BODY_SIZE_PT));
    }
    doc.push(title);

    add_bullets(doc, &entry.bullets);
}

fn add_project(doc: &mut Document, entry: &ProjectEntry) {
    let mut line = Paragraph::new().run(Run::new(display(&entry.name), BODY_SIZE_PT).bold());
    if let Some(dates) = present(&entry.dates) {
        line = line.run(Run::new(format!(" | {dates}"), BODY_SIZE_PT));
    }
    doc.push(line);

    add_bullets(doc, &entry.bullets);
}

fn add_bullets(doc: &mut Document, items: &[String]) {
    for item in items {
        doc.push(Paragraph::bulleted(Run::new(item.as_str(), BODY_SIZE_PT)));
    }
}

/// A field's value when set and non-empty.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// Required display fields fall back to an empty string.
fn display(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}
