//! Above-the-fold hero section

use leptos::prelude::*;

use super::{CheckoutButtons, ICON_CHECK_CIRCLE, Icon};
use crate::sections::HeroCopy;

/// Avatar strip shown next to the social proof line
const AVATARS: [&str; 4] = [
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=100",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=100",
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=100",
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=100",
];

#[component]
pub fn AboveTheFold(copy: HeroCopy) -> impl IntoView {
    let HeroCopy {
        eyebrow,
        headline,
        subheadline,
        video_url,
        bullets,
        friction_remover,
        action,
        social_proof,
    } = copy;

    view! {
        <section id="above_the_fold" class="page-section hero">
            <div class="hero-glow"></div>
            <div class="container narrow">
                {eyebrow.map(|text| view! { <span class="eyebrow">{text}</span> })}
                <h1 class="hero-title">{headline}</h1>
                {subheadline.map(|text| view! { <p class="hero-subtitle">{text}</p> })}
                {video_url.map(|src| view! {
                    <div class="hero-video">
                        <video
                            src=src
                            controls=true
                            autoplay=true
                            muted=true
                            loop=true
                            playsinline=true
                        >
                            "Your browser does not support the video tag."
                        </video>
                    </div>
                })}
                {bullets.map(|bullets| view! {
                    <div class="hero-bullets">
                        {bullets.into_iter().enumerate().map(|(idx, bullet)| view! {
                            <div class="hero-bullet" data-index=idx.to_string()>
                                <Icon path=ICON_CHECK_CIRCLE class="icon-accent" />
                                <span>{bullet}</span>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                })}
                {friction_remover.map(|text| view! {
                    <p class="friction-remover">
                        <span class="pulse-dot"></span>
                        {text}
                    </p>
                })}
                <CheckoutButtons action=action />
                {social_proof.map(|text| view! {
                    <div class="hero-social-proof">
                        <div class="avatar-strip">
                            {AVATARS.into_iter().enumerate().map(|(idx, url)| view! {
                                <img src=url alt=format!("User {}", idx + 1) class="avatar" />
                            }).collect::<Vec<_>>()}
                        </div>
                        <p class="social-proof">{text}</p>
                    </div>
                })}
            </div>
        </section>
    }
}
