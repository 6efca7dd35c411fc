//! Power differentiators - who teaches and why it is different

use leptos::prelude::*;

use super::{ICON_SHIELD_CHECK, Icon};
use crate::sections::{Author, DifferentiatorsCopy};

#[component]
pub fn DifferentiatorsSection(copy: DifferentiatorsCopy) -> impl IntoView {
    let DifferentiatorsCopy {
        headline,
        image_url,
        author,
        bullets,
    } = copy;
    let portrait_alt = author
        .as_ref()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| headline.clone());

    view! {
        <section id="differentiators" class="page-section differentiators">
            <div class="container two-col">
                <div class="portrait-col">
                    {image_url.map(|src| view! {
                        <div class="portrait">
                            <div class="portrait-backdrop"></div>
                            <img src=src alt=portrait_alt class="portrait-img" />
                        </div>
                    })}
                    {author.map(|author| view! { <AuthorCard author=author /> })}
                </div>
                <div>
                    <h2 class="section-title">{headline}</h2>
                    {bullets.map(|bullets| view! {
                        <div class="differentiator-list">
                            {bullets.into_iter().enumerate().map(|(idx, bullet)| view! {
                                <div class="differentiator" data-index=idx.to_string()>
                                    <Icon path=ICON_SHIELD_CHECK class="icon-accent" />
                                    <span>{bullet}</span>
                                </div>
                            }).collect::<Vec<_>>()}
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AuthorCard(author: Author) -> impl IntoView {
    view! {
        <div class="author-card">
            <p class="author-name">{author.name}</p>
            {author.title.map(|title| view! { <p class="author-title">{title}</p> })}
            {author.quote.map(|quote| view! { <p class="author-quote">"“" {quote} "”"</p> })}
        </div>
    }
}
