//! Lead section: pain point and the promise that answers it

use leptos::prelude::*;

use super::{ICON_CHECK_CIRCLE, ICON_PLAY, Icon};
use crate::sections::LeadCopy;

#[component]
pub fn LeadSection(copy: LeadCopy) -> impl IntoView {
    let LeadCopy {
        headline,
        pain_point,
        solution_teaser,
        usp,
    } = copy;

    view! {
        <section id="lead_section" class="page-section lead">
            <div class="container two-col">
                <div>
                    <h2 class="kicker">{headline}</h2>
                    {pain_point.map(|text| view! {
                        <p class="pain-point">"“" {text} "”"</p>
                    })}
                    {solution_teaser.map(|text| view! {
                        <p class="solution-teaser">{text}</p>
                    })}
                </div>
                <div class="lead-cards">
                    {usp.map(|text| view! {
                        <div class="lead-card lead-usp">
                            <div class="lead-card-icon"><Icon path=ICON_CHECK_CIRCLE /></div>
                            <div>
                                <h4>"Resultados Reales"</h4>
                                <p class="usp">{text}</p>
                            </div>
                        </div>
                    })}
                    <div class="lead-card">
                        <div class="lead-card-icon"><Icon path=ICON_PLAY /></div>
                        <div>
                            <h4>"Acceso inmediato"</h4>
                            <p>"Metodología paso a paso"</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
