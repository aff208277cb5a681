// Prompt text for the tailoring call. Placeholders are filled by `build_tailoring_prompt`.

/// Tailoring prompt template. Replace `{job_description}` and `{resume_text}` before sending.
pub const TAILORING_PROMPT_TEMPLATE: &str = r#"You are an expert career coach helping a 21-year-old recent college graduate apply for jobs.

Task: tailor the resume below to the job description and write a matching cover letter.

Job Description:
{job_description}

Resume:
{resume_text}

Output Requirements:
1. Identify the company name and the job title.
2. Relocation: if the job requires working on-site, or does not explicitly say it is remote, add a sentence to the final paragraph of the cover letter stating a clear willingness to relocate for the role.
3. Resume content: rewrite the summary and the experience bullet points to highlight the relevant skills.
4. Resume skills: consolidate all skills into a single comma-separated list. Do NOT use sub-labels or categories.
5. Cover letter: write it in the voice of a professional, eager 21-year-old recent graduate. Close with "Sincerely, Tommy Delta".
6. Return the response strictly as a JSON object with this schema:
{
    "company": "Company Name",
    "job_title": "Job Title",
    "cover_letter_text": "Full text...",
    "resume_data": {
        "contact_info": {"name": "...", "email": "...", "phone": "...", "location": "...", "linkedin": "..."},
        "summary": "...",
        "education": [{"institution": "...", "location": "...", "degree": "...", "graduation_date": "...", "details": ["..."]}],
        "experience": [{"company": "...", "title": "...", "dates": "...", "bullets": ["..."]}],
        "projects": [{"name": "...", "dates": "...", "bullets": ["..."]}],
        "skills": "Skill 1, Skill 2, Skill 3, ..."
    }
}
"#;

/// Fills both placeholders in one pass over the template, so braces inside
/// either input are never treated as placeholders.
pub fn build_tailoring_prompt(job_description: &str, resume_text: &str) -> String {
    TAILORING_PROMPT_TEMPLATE
        .split("{job_description}")
        .map(|piece| piece.replace("{resume_text}", resume_text))
        .collect::<Vec<_>>()
        .join(job_description)
}
