//! About the team

use leptos::prelude::*;

use super::{ICON_USER_CIRCLE, Icon};
use crate::sections::TeamCopy;

#[component]
pub fn AboutTeamSection(copy: TeamCopy) -> impl IntoView {
    view! {
        <section id="about_team" class="page-section about-team">
            <div class="container narrow">
                <h2 class="section-title">{copy.headline}</h2>
                {copy.team.map(|team| view! {
                    <div class="team-list">
                        {team.into_iter().enumerate().map(|(idx, member)| view! {
                            <div class="team-member" data-index=idx.to_string()>
                                <div class="team-avatar"><Icon path=ICON_USER_CIRCLE size="96" /></div>
                                <div>
                                    <h3 class="member-name">{member.name}</h3>
                                    <p class="member-role">{member.role}</p>
                                    <p class="member-desc">"“" {member.desc} "”"</p>
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </section>
    }
}
