use yew::prelude::*;

use crate::components::{LucideIcon, Motion, SectionHeading, Stagger};
use crate::content::INVEST_REASONS;
use crate::hooks::use_in_view;
use crate::motion::Variant;

#[function_component(WhyInvest)]
pub fn why_invest() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section ref={node} class="section alt">
            <style>
                {r#"
                    .reason-card { text-align: center; }
                    .reason-card .icon-disc {
                        width: 3.5rem;
                        height: 3.5rem;
                        margin: 0 auto 1rem;
                        color: var(--gold);
                    }
                    .reason-card .icon-disc .icon { width: 1.75rem; height: 1.75rem; }
                    .reason-card h3 { margin: 0 0 0.5rem; }
                    .reason-card p { margin: 0; color: var(--charcoal-light); font-size: 0.875rem; }
                "#}
            </style>
            <div class="container wide">
                <Stagger visible={in_view} class="section-head">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <SectionHeading>{"Why Invest Now"}</SectionHeading>
                    </Motion>
                </Stagger>

                <Stagger visible={in_view} class="grid grid-4">
                    { for INVEST_REASONS.iter().enumerate().map(|(order, reason)| html! {
                        <Motion key={reason.title} variant={Variant::FadeUp} order={order} class="card reason-card">
                            <div class="icon-disc">
                                <LucideIcon icon={reason.icon} />
                            </div>
                            <h3 class="card-title">{ reason.title }</h3>
                            <p>{ reason.description }</p>
                        </Motion>
                    }) }
                </Stagger>
            </div>
        </section>
    }
}
