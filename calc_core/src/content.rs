//! Educational content shown beside each calculator.
//!
//! One markdown file per calculator, `content/<slug>.md`, embedded in the
//! binary. A document is an optional `# Title`, an intro paragraph and
//! `## ` sections. Calculators without a document fall back to their
//! catalog description.

use rust_embed::RustEmbed;
use serde::Serialize;

use crate::catalog::CalculatorDescriptor;

#[derive(RustEmbed)]
#[folder = "content/"]
struct ContentFiles;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub intro: String,
    pub sections: Vec<Section>,
}

impl Content {
    /// Split a markdown document on `## ` headings
    pub fn parse(markdown: &str) -> Self {
        let mut intro = Vec::new();
        let mut sections: Vec<Section> = Vec::new();
        for line in markdown.lines() {
            if let Some(heading) = line.strip_prefix("## ") {
                sections.push(Section {
                    heading: heading.trim().to_string(),
                    body: String::new(),
                });
                continue;
            }
            match sections.last_mut() {
                Some(section) => {
                    section.body.push_str(line);
                    section.body.push('\n');
                }
                None if line.starts_with("# ") => {}
                None => intro.push(line),
            }
        }
        for section in &mut sections {
            section.body = section.body.trim().to_string();
        }
        Self {
            intro: intro.join("\n").trim().to_string(),
            sections,
        }
    }

    fn fallback(descriptor: &CalculatorDescriptor) -> Self {
        Self {
            intro: descriptor.description.to_string(),
            sections: Vec::new(),
        }
    }
}

/// Raw markdown for a slug, if one is embedded
pub fn markdown(slug: &str) -> Option<String> {
    let file = ContentFiles::get(&format!("{}.md", slug))?;
    String::from_utf8(file.data.into_owned()).ok()
}

pub fn for_calculator(descriptor: &CalculatorDescriptor) -> Content {
    match markdown(descriptor.slug) {
        Some(text) => Content::parse(&text),
        None => {
            tracing::debug!(slug = descriptor.slug, "no educational content, using description");
            Content::fallback(descriptor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CALCULATORS;

    #[test]
    fn test_parse_sections() {
        let content = Content::parse("# BMI\n\nIntro text.\n\n## Formula\n\nBMI = kg / m²\n\n## Limits\nNot for athletes.\n");
        assert_eq!(content.intro, "Intro text.");
        assert_eq!(content.sections.len(), 2);
        assert_eq!(content.sections[0].heading, "Formula");
        assert_eq!(content.sections[0].body, "BMI = kg / m²");
        assert_eq!(content.sections[1].body, "Not for athletes.");
    }

    #[test]
    fn test_every_calculator_has_a_document() {
        for calculator in CALCULATORS {
            let text = markdown(calculator.slug);
            assert!(text.is_some(), "missing content/{}.md", calculator.slug);
            let content = for_calculator(calculator);
            assert!(!content.intro.is_empty(), "{} has no intro", calculator.slug);
            assert!(!content.sections.is_empty(), "{} has no sections", calculator.slug);
        }
    }

    #[test]
    fn test_missing_document_falls_back() {
        let mut descriptor = *crate::catalog::find_calculator("tip").unwrap();
        descriptor.slug = "no-such-calculator";
        let content = for_calculator(&descriptor);
        assert_eq!(content.intro, descriptor.description);
        assert!(content.sections.is_empty());
    }
}
