use yew::prelude::*;

use crate::components::{Icon, LucideIcon, Motion, SectionHeading, SectionLabel, Stagger, TeamPhoto};
use crate::content::TEAM;
use crate::hooks::use_in_view;
use crate::motion::Variant;

#[function_component(Team)]
pub fn team() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section ref={node} class="section">
            <style>
                {r#"
                    .member-card { padding: 2rem; }
                    .member-head {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        margin-bottom: 1.5rem;
                    }
                    .member-head h3 {
                        font-family: var(--font-display);
                        font-weight: 400;
                        font-size: 1.5rem;
                        margin: 1rem 0 0;
                    }
                    .member-role { color: var(--gold); font-weight: 500; margin: 0; }
                    .member-card ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="container">
                <Stagger visible={in_view} class="section-head">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <SectionLabel>{"The Team"}</SectionLabel>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={1}>
                        <SectionHeading>{"Domain Expertise Meets Technical Depth"}</SectionHeading>
                    </Motion>
                </Stagger>

                <Stagger visible={in_view} class="grid grid-2">
                    { for TEAM.iter().enumerate().map(|(order, member)| html! {
                        <Motion key={member.name} variant={Variant::FadeUp} order={order} class="card member-card">
                            <div class="member-head">
                                <TeamPhoto src={member.photo} initial={member.initial} alt={member.alt} />
                                <h3>{ member.name }</h3>
                                <p class="member-role">{ member.role }</p>
                            </div>
                            <ul class="check-list">
                                { for member.credentials.iter().map(|line| html! {
                                    <li class="check-item" key={*line}>
                                        <LucideIcon icon={Icon::Check} />
                                        { *line }
                                    </li>
                                }) }
                            </ul>
                        </Motion>
                    }) }
                </Stagger>
            </div>
        </section>
    }
}
