//! Markdown export of the page copy, for review outside the browser.

use page_leptos::types::{ContentField, LandingPageData, SectionContent};

/// Render the whole dataset as a markdown outline.
///
/// Sections appear in storage order. Only present fields are written.
pub fn to_markdown(data: &LandingPageData) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n_{}_\n", data.offer_name, data.business_name));

    for section in &data.sections {
        output.push_str(&format!("\n## {}\n\n`{}`\n", section.name, section.id));
        if !section.purpose.is_empty() {
            output.push_str(&format!("\n> {}\n", section.purpose));
        }
        write_content(&mut output, &section.content);
    }

    output
}

fn write_content(output: &mut String, content: &SectionContent) {
    output.push('\n');
    for field in ContentField::ALL {
        if let Some(value) = content.field(field) {
            output.push_str(&format!("- **{}:** {}\n", field.label(), value));
        }
    }

    if let Some(bullets) = &content.bullets {
        write_list(output, "Bullets", bullets.iter().map(|b| b.to_string()));
    }
    if let Some(reviews) = &content.reviews {
        write_list(
            output,
            "Reviews",
            reviews.iter().map(|r| format!("\"{}\" ({})", r.text, r.author)),
        );
    }
    if let Some(steps) = &content.steps {
        write_list(
            output,
            "Steps",
            steps.iter().map(|s| format!("{}: {}", s.title, s.desc)),
        );
    }
    if let Some(team) = &content.team {
        write_list(
            output,
            "Team",
            team.iter()
                .map(|m| format!("{}, {}: {}", m.name, m.role, m.desc)),
        );
    }
    if let Some(archetypes) = &content.archetypes {
        write_list(
            output,
            "Archetypes",
            archetypes
                .iter()
                .map(|a| format!("{}: \"{}\"", a.title, a.quote)),
        );
    }
    if let Some(faqs) = &content.faqs {
        write_list(output, "FAQs", faqs.iter().map(|f| format!("{} {}", f.q, f.a)));
    }
}

fn write_list(output: &mut String, title: &str, items: impl Iterator<Item = String>) {
    output.push_str(&format!("\n**{}:**\n\n", title));
    for (idx, item) in items.enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_landing_page;
    use page_leptos::types::{Faq, SectionCopy};
    use pretty_assertions::assert_eq;

    #[test]
    fn exports_small_page() {
        let data = LandingPageData {
            business_name: "Pablo y German".into(),
            offer_name: "Workshop".into(),
            sections: vec![SectionCopy {
                id: "faqs".into(),
                name: "10. FAQs".into(),
                purpose: "Remove final objections.".into(),
                content: SectionContent {
                    headline: "Tus dudas".into(),
                    faqs: Some(vec![Faq {
                        q: "¿X?".into(),
                        a: "Y".into(),
                    }]),
                    ..Default::default()
                },
            }],
        };

        assert_eq!(
            to_markdown(&data),
            "# Workshop\n\
             \n\
             _Pablo y German_\n\
             \n\
             ## 10. FAQs\n\
             \n\
             `faqs`\n\
             \n\
             > Remove final objections.\n\
             \n\
             - **Headline:** Tus dudas\n\
             \n\
             **FAQs:**\n\
             \n\
             1. ¿X? Y\n"
        );
    }

    #[test]
    fn exports_every_default_section_in_order() {
        let data = default_landing_page();
        let markdown = to_markdown(&data);

        let mut last = 0;
        for section in &data.sections {
            let heading = format!("## {}", section.name);
            let pos = markdown.find(&heading).unwrap();
            assert!(pos >= last, "{} out of order", section.id);
            last = pos;
        }
        assert!(markdown.contains("- **Button Text:** Quiero Inscribirme Ahora"));
        assert!(markdown.contains("1. Paso 1: Inscripción: Completás un formulario breve tras tu pago."));
    }
}
