//! Basic page generation example.
//!
//! Run with: `cargo run --example basic_page`

use page_leptos::types::{Faq, LandingPageData, SectionContent, SectionCopy};
use page_leptos::{RenderOptions, render_page};

fn main() {
    // A two-section page: hero with both checkout rails, then FAQs
    let data = LandingPageData {
        business_name: "Pablo y German".into(),
        offer_name: "Workshop Intensivo".into(),
        sections: vec![
            SectionCopy {
                id: "above_the_fold".into(),
                name: "1. Above the Fold".into(),
                purpose: "Capture attention.".into(),
                content: SectionContent {
                    eyebrow: Some("Workshop en vivo".into()),
                    headline: "Aprende a vender en 4 horas".into(),
                    cta: Some("Quiero mi lugar".into()),
                    mercado_pago_url: Some("https://mpago.la/example".into()),
                    paypal_url: Some("https://paypal.me/example".into()),
                    ..Default::default()
                },
            },
            SectionCopy {
                id: "faqs".into(),
                name: "10. FAQs".into(),
                purpose: "Remove final objections.".into(),
                content: SectionContent {
                    headline: "Tus dudas resueltas".into(),
                    faqs: Some(vec![Faq {
                        q: "¿Queda grabado?".into(),
                        a: "Sí, tienes acceso a la grabación.".into(),
                    }]),
                    ..Default::default()
                },
            },
        ],
    };

    let html = render_page(&data, &RenderOptions::default());

    let output_path = "basic_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
