use yew::prelude::*;

use crate::components::{LucideIcon, Motion, SectionHeading, SectionLabel, Stagger};
use crate::content::FEATURES;
use crate::hooks::use_in_view;
use crate::motion::Variant;

#[function_component(CoreFeatures)]
pub fn core_features() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section ref={node} class="section">
            <style>
                {r#"
                    .feature-card h3 { margin: 0 0 0.75rem; }
                    .feature-card .feature-body {
                        color: var(--charcoal-light);
                        font-size: 0.875rem;
                        line-height: 1.65;
                        margin: 0 0 1rem;
                    }
                    .feature-card .feature-highlight {
                        color: var(--gold);
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin: 0;
                    }
                    .icon-tile {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        background: var(--gold-subtle);
                        color: var(--gold);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
            <div class="container wide">
                <Stagger visible={in_view} class="section-head">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <SectionLabel>{"What SAL Does"}</SectionLabel>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={1}>
                        <SectionHeading>{"Everything a Great Operations Manager Would Do"}</SectionHeading>
                    </Motion>
                </Stagger>

                <Stagger visible={in_view} class="grid grid-3">
                    { for FEATURES.iter().enumerate().map(|(order, feature)| html! {
                        <Motion key={feature.title} variant={Variant::FadeUp} order={order} class="card feature-card">
                            <div class="icon-tile">
                                <LucideIcon icon={feature.icon} />
                            </div>
                            <h3 class="card-title">{ feature.title }</h3>
                            <p class="feature-body">{ feature.description }</p>
                            <p class="feature-highlight">{ feature.highlight }</p>
                        </Motion>
                    }) }
                </Stagger>
            </div>
        </section>
    }
}
