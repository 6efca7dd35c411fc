//! How it works - numbered steps

use leptos::prelude::*;

use crate::sections::StepsCopy;

#[component]
pub fn HowItWorksSection(copy: StepsCopy) -> impl IntoView {
    view! {
        <section id="how_it_works" class="page-section how-it-works">
            <div class="container narrow">
                <h2 class="section-title">{copy.headline}</h2>
                {copy.steps.map(|steps| view! {
                    <div class="steps">
                        <div class="steps-rail"></div>
                        {steps.into_iter().enumerate().map(|(idx, step)| view! {
                            <div class="step" data-index=idx.to_string()>
                                <div class="step-number">{(idx + 1).to_string()}</div>
                                <div class="step-body">
                                    <h3>{step.title}</h3>
                                    <p>{step.desc}</p>
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </section>
    }
}
