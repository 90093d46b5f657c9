use yew::prelude::*;

use crate::components::{Icon, LucideIcon, Motion, SectionHeading, SectionLabel, Stagger};
use crate::content::{AWARD, TRACTION_BADGES};
use crate::hooks::use_in_view;
use crate::motion::Variant;

#[function_component(Traction)]
pub fn traction() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section ref={node} class="section alt">
            <style>
                {r#"
                    .badges {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 3rem;
                    }
                    .badge {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(122, 143, 110, 0.1);
                        color: var(--sage);
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                    }
                    .badge .icon { width: 1rem; height: 1rem; }
                    .award {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: var(--gold-subtle);
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 500;
                    }
                    .award .icon { width: 1.5rem; height: 1.5rem; color: var(--gold); }
                "#}
            </style>
            <div class="container">
                <Stagger visible={in_view} class="section-head tight">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <SectionLabel>{"Traction"}</SectionLabel>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={1}>
                        <SectionHeading>{"This Isn't a Concept. It's Working."}</SectionHeading>
                    </Motion>
                </Stagger>

                <Stagger visible={in_view} class="badges">
                    { for TRACTION_BADGES.iter().enumerate().map(|(order, badge)| html! {
                        <Motion key={*badge} variant={Variant::FadeUp} order={order} class="badge">
                            <LucideIcon icon={Icon::Check} />
                            { *badge }
                        </Motion>
                    }) }
                </Stagger>

                <Motion variant={Variant::FadeUp} visible={in_view} class="centered">
                    <div class="award">
                        <LucideIcon icon={Icon::Award} />
                        <span>{ AWARD }</span>
                    </div>
                </Motion>
            </div>
        </section>
    }
}
