//! The compiled-in landing page copy.

use page_leptos::types::{Archetype, Faq, LandingPageData, SectionContent, SectionCopy, Step};

const BUSINESS_NAME: &str = "Pablo y German";
const OFFER_NAME: &str = "Dominando la Ley de la Asunción";

const MERCADO_PAGO_URL: &str = "https://mpago.la/2NQFYEi?ref=nevillegoddard.blog";
const PAYPAL_URL: &str = "https://www.paypal.com/ncp/payment/NFCE9GEV66TWU?ref=nevillegoddard.blog";

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn list(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|item| item.to_string()).collect())
}

fn section(id: &str, name: &str, purpose: &str, content: SectionContent) -> SectionCopy {
    SectionCopy {
        id: id.into(),
        name: name.into(),
        purpose: purpose.into(),
        content,
    }
}

/// The page as shipped: nine populated slots, both checkout rails.
pub fn default_landing_page() -> LandingPageData {
    LandingPageData {
        business_name: BUSINESS_NAME.into(),
        offer_name: OFFER_NAME.into(),
        sections: vec![
            section(
                "above_the_fold",
                "1. Above the Fold",
                "Capture attention and prompt immediate action.",
                SectionContent {
                    eyebrow: text("Asumí el estado deseado sin ansiedad, sin dudas y sin sabotearte."),
                    headline: "Aprendé a Dominar la Ley de la Asunción".into(),
                    bullets: list(&[
                        "Asumí el estado deseado sin sabotearte",
                        "Liberá la carga emocional que interfiere",
                        "Entrenamiento práctico para el sistema interno",
                    ]),
                    cta: text("Quiero Inscribirme Ahora"),
                    friction_remover: text("Inversión: 27 USD / 27000 ARS"),
                    video_url: text("/assets/videos/workshop-video.mp4"),
                    mercado_pago_url: text(MERCADO_PAGO_URL),
                    paypal_url: text(PAYPAL_URL),
                    ..Default::default()
                },
            ),
            section(
                "lead_section",
                "2. Lead Section",
                "Build credibility and connect with pain points.",
                SectionContent {
                    headline: "El secreto de la manifestación real".into(),
                    usp: text("Integración real de mente, cuerpo y emoción."),
                    pain_point: text(
                        "¿Visualizás y afirmás pero la ansiedad vuelve a los 5 minutos? Intentar sostener el estado no es tan simple como te lo explicaron.",
                    ),
                    solution_teaser: text(
                        "No se trata de desear, se trata de SER. Te enseñamos a entrenar tu sistema interno completo para habitar una realidad nueva.",
                    ),
                    ..Default::default()
                },
            ),
            section(
                "benefits_section",
                "4. Benefits Section",
                "Highlight the dream outcome.",
                SectionContent {
                    headline: "Lo que vas a lograr en este Workshop".into(),
                    bullets: list(&[
                        "Sostener el estado deseado sin ansiedad",
                        "Liberar la carga emocional que interfiere",
                        "Dejar la vigilancia mental constante",
                        "Un mes gratuito al Club de la Imaginación",
                    ]),
                    ..Default::default()
                },
            ),
            section(
                "differentiators",
                "5. Power Differentiators",
                "Why this workshop is unique.",
                SectionContent {
                    headline: "¿Por qué aprender con Pablo?".into(),
                    image_url: text("/assets/images/pablo.jpg"),
                    author_name: text("Pablo"),
                    author_title: text("Empresario (42 años)"),
                    author_quote: text(
                        "Toma decisiones reales cada día. No es maestro ni gurú, es alguien que aprendió a entrenar su sistema interno.",
                    ),
                    bullets: list(&[
                        "No es teoría, es práctica de años",
                        "Enfoque en decisiones reales de negocios",
                        "Sin lenguaje de gurú ni promesas de milagros",
                        "Basado en la integración de mente y cuerpo",
                    ]),
                    ..Default::default()
                },
            ),
            section(
                "how_it_works",
                "6. How It Works",
                "Clarify the process.",
                SectionContent {
                    headline: "Tu camino a la claridad".into(),
                    steps: Some(vec![
                        Step {
                            title: "Paso 1: Inscripción".into(),
                            desc: "Completás un formulario breve tras tu pago.".into(),
                        },
                        Step {
                            title: "Paso 2: Comunidad".into(),
                            desc: "Te sumamos al grupo privado de Telegram para acceso al link."
                                .into(),
                        },
                        Step {
                            title: "Paso 3: Workshop Vivo".into(),
                            desc: "Entrenamiento y preguntas en vivo por Zoom.".into(),
                        },
                    ]),
                    ..Default::default()
                },
            ),
            section(
                "offer_section",
                "7. Offer Section",
                "Summarize offer and drive action.",
                SectionContent {
                    headline: "Asumí tu estado deseado hoy mismo".into(),
                    bullets: list(&[
                        "Workshop en vivo",
                        "Grabación completa de la sesión",
                        "Cuaderno de ejercicios para tu práctica",
                        "Un mes gratuito al Club de la Imaginación",
                    ]),
                    cta: text("Inscribirme Ahora"),
                    friction_remover: text(
                        "Valor real superior a 250 USD - Hoy solo 27 USD / 27000 ARS",
                    ),
                    mercado_pago_url: text(MERCADO_PAGO_URL),
                    paypal_url: text(PAYPAL_URL),
                    ..Default::default()
                },
            ),
            section(
                "social_proof_intent",
                "9. Social Proof with Intent",
                "Tailor to audience archetypes.",
                SectionContent {
                    headline: "Esto es para vos si...".into(),
                    archetypes: Some(vec![
                        Archetype {
                            title: "El Ansioso".into(),
                            quote: "Si visualizás pero sentís que algo interno se desacomoda rápido."
                                .into(),
                        },
                        Archetype {
                            title: "El Pragmático".into(),
                            quote: "Si buscás herramientas reales y honestas sin misticismo exagerado."
                                .into(),
                        },
                    ]),
                    ..Default::default()
                },
            ),
            section(
                "faqs",
                "10. FAQs",
                "Remove final objections.",
                SectionContent {
                    headline: "Tus dudas resueltas".into(),
                    faqs: Some(vec![
                        Faq {
                            q: "¿Qué pasa si no puedo asistir al vivo?".into(),
                            a: "Recibirás la grabación completa para verla a tu ritmo.".into(),
                        },
                        Faq {
                            q: "¿Tengo que saber algo previo?".into(),
                            a: "Es ideal si ya conocés la Ley, pero el enfoque es práctico y accesible para todos."
                                .into(),
                        },
                    ]),
                    ..Default::default()
                },
            ),
            section(
                "full_stop",
                "11. Full Stop",
                "Final recap and drive action.",
                SectionContent {
                    headline: "La claridad es el punto de inflexión".into(),
                    bullets: list(&[
                        "Entrenamiento intensivo",
                        "Sin dudas, sin sabotaje",
                        "Inversión única: 27 USD / 27000 ARS",
                    ]),
                    cta: text("Sí, Quiero Empezar Ahora"),
                    friction_remover: text("Te esperamos, Pablo y German."),
                    mercado_pago_url: text(MERCADO_PAGO_URL),
                    paypal_url: text(PAYPAL_URL),
                    ..Default::default()
                },
            ),
        ],
    }
}
