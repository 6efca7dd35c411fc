//! Root document component - the complete HTML page
//!
//! Page sections in slot order, the footer, and (when an editor snapshot is
//! given) the editor sidebar next to the page.

use leptos::prelude::*;

use super::{EditorSidebar, Footer, PageSections};
use crate::styles::{EDITOR_CSS, PAGE_CSS};
use crate::types::{EditorSnapshot, LandingPageData};

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(
    data: LandingPageData,
    /// Editor state; `None` renders the bare page
    editor: Option<EditorSnapshot>,
    /// Copyright year in the footer
    footer_year: u16,
) -> impl IntoView {
    let title = data.offer_name.clone();
    let business_name = data.business_name.clone();
    let body_class = if editor.is_some() { "with-editor" } else { "" };
    let sidebar = editor.map(|editor| {
        view! {
            <style>{EDITOR_CSS}</style>
            <EditorSidebar data=data.clone() editor=editor />
        }
    });

    view! {
        <html lang="es">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body class=body_class>
                {sidebar}
                <main class="page">
                    <PageSections data=data />
                    <Footer business_name=business_name year=footer_year />
                </main>
            </body>
        </html>
    }
}
