//! Editor sidebar - one collapsible panel per section
//!
//! Rendered from an [`EditorSnapshot`]: at most one panel is expanded, and
//! while a refinement is in flight every refine button is disabled.

use leptos::prelude::*;

use super::{ICON_CARET_DOWN, ICON_CARET_UP, ICON_SPARKLE, Icon};
use crate::types::{ContentField, EditorSnapshot, LandingPageData, SectionCopy};

/// Placeholder for the feedback box
const FEEDBACK_PLACEHOLDER: &str = "e.g., 'Make it punchier', 'Target skeptical users'";

#[component]
pub fn EditorSidebar(data: LandingPageData, editor: EditorSnapshot) -> impl IntoView {
    let busy = editor.refining.is_some();

    view! {
        <aside class="editor-sidebar">
            {data.sections.into_iter().map(|section| {
                let open = editor.open_section.as_deref() == Some(section.id.as_str());
                let refining = editor.refining.as_deref() == Some(section.id.as_str());
                let feedback = editor.feedback.get(&section.id).cloned().unwrap_or_default();
                view! {
                    <EditorPanel
                        section=section
                        open=open
                        refining=refining
                        busy=busy
                        feedback=feedback
                    />
                }
            }).collect::<Vec<_>>()}
        </aside>
    }
}

#[component]
fn EditorPanel(
    section: SectionCopy,
    open: bool,
    refining: bool,
    busy: bool,
    feedback: String,
) -> impl IntoView {
    let SectionCopy {
        id,
        name,
        purpose,
        content,
    } = section;
    let caption = id.replace('_', " ");
    let panel_class = if open { "editor-panel open" } else { "editor-panel" };
    let caret = if open { ICON_CARET_UP } else { ICON_CARET_DOWN };

    let body = open.then(|| {
        let eyebrow = content.eyebrow.clone();
        let pain_point = content.pain_point.clone().filter(|text| !text.is_empty());
        let cta = content.cta.clone().filter(|text| !text.is_empty());
        let bullets = content.bullets.clone();
        let field_id = id.clone();
        let spin = if refining { "spin" } else { "" };
        let label = if refining { "Refining..." } else { "Refine with Gemini" };

        view! {
            <div class="editor-body">
                <p class="editor-purpose">{purpose}</p>
                {eyebrow.map(|value| view! {
                    <FieldInput section_id=field_id.clone() field=ContentField::Eyebrow value=value rows=0 />
                })}
                <FieldInput
                    section_id=field_id.clone()
                    field=ContentField::Headline
                    value=content.headline.clone()
                    rows=2
                />
                {bullets.map(|bullets| {
                    let bullet_id = field_id.clone();
                    view! {
                        <div class="editor-field">
                            <label class="editor-label">"Bullets"</label>
                            {bullets.into_iter().enumerate().map(|(idx, bullet)| view! {
                                <input
                                    type="text"
                                    class="editor-input"
                                    name=format!("{}.bullets.{}", bullet_id, idx)
                                    data-bullet=idx.to_string()
                                    value=bullet
                                />
                            }).collect::<Vec<_>>()}
                        </div>
                    }
                })}
                {pain_point.map(|value| view! {
                    <FieldInput section_id=field_id.clone() field=ContentField::PainPoint value=value rows=3 />
                })}
                {cta.map(|value| view! {
                    <FieldInput section_id=field_id.clone() field=ContentField::Cta value=value rows=0 />
                })}
                <div class="editor-refine">
                    <label class="editor-label">"AI Feedback (Optional)"</label>
                    <input
                        type="text"
                        class="editor-input feedback"
                        name=format!("{}.feedback", field_id)
                        placeholder=FEEDBACK_PLACEHOLDER
                        value=feedback
                    />
                    <button
                        type="button"
                        class="refine-btn"
                        data-section=field_id.clone()
                        disabled=busy
                    >
                        <Icon path=ICON_SPARKLE size="12" class=spin />
                        {label}
                    </button>
                </div>
            </div>
        }
    });

    view! {
        <div class=panel_class data-section=id>
            <button type="button" class="editor-toggle">
                <div>
                    <h3 class="editor-name">{name}</h3>
                    <p class="editor-id">{caption}</p>
                </div>
                <Icon path=caret size="16" />
            </button>
            {body}
        </div>
    }
}

/// Labelled text input bound to one content key; `rows > 0` renders a textarea
#[component]
fn FieldInput(section_id: String, field: ContentField, value: String, rows: u8) -> impl IntoView {
    let name = format!("{}.{}", section_id, field.key());
    let control = if rows == 0 {
        view! {
            <input type="text" class="editor-input" name=name data-field=field.key() value=value />
        }
        .into_any()
    } else {
        view! {
            <textarea class="editor-input" rows=rows.to_string() name=name data-field=field.key()>
                {value}
            </textarea>
        }
        .into_any()
    };

    view! {
        <div class="editor-field">
            <label class="editor-label">{field.label()}</label>
            {control}
        </div>
    }
}
