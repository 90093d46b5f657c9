use yew::prelude::*;

use crate::components::{LucideIcon, Motion, SectionHeading, SectionLabel, Stagger};
use crate::content::ALERTS;
use crate::hooks::use_in_view;
use crate::motion::Variant;

/// Sample alerts SAL pushes to the owner without being asked.
#[function_component(ProactiveIntelligence)]
pub fn proactive_intelligence() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section id="features" ref={node} class="section alt">
            <style>
                {r#"
                    .alerts {
                        max-width: 48rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .alert-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1.25rem;
                    }
                    .alert-text { flex: 1; margin: 0; font-weight: 500; }
                    .alert-actions { display: flex; gap: 0.5rem; flex-shrink: 0; }
                    .alert-actions button {
                        border: 0;
                        border-radius: 9999px;
                        padding: 0.375rem 1rem;
                        font-size: 0.875rem;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .alert-yes { background: var(--gold); color: #fff; }
                    .alert-yes:hover { background: var(--gold-light); }
                    .alert-later { background: var(--cream-dark); color: var(--charcoal-light); }
                    .proactive-tagline { text-align: center; margin-top: 3rem; color: var(--charcoal-light); }
                    .proactive-tagline strong { color: var(--gold); font-weight: 600; }
                "#}
            </style>
            <div class="container wide">
                <Stagger visible={in_view} class="section-head">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <SectionLabel>{"Proactive Business Intelligence"}</SectionLabel>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={1}>
                        <SectionHeading>{"SAL Spots Problems Before You Do"}</SectionHeading>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={2} tag="p" class="lead">
                        {"SAL monitors your business 24/7, analyzes trends automatically, and sends you \
                          alerts when something needs your attention. Never miss anything important again."}
                    </Motion>
                </Stagger>

                <Stagger visible={in_view} class="alerts">
                    { for ALERTS.iter().enumerate().map(|(order, alert)| html! {
                        <Motion key={order} variant={Variant::FadeUp} order={order} class="card alert-card">
                            <div class={classes!("icon-disc", alert.tone.class())}>
                                <LucideIcon icon={alert.icon} />
                            </div>
                            <p class="alert-text">{ format!("\u{201c}{}\u{201d}", alert.text) }</p>
                            <div class="alert-actions">
                                <button type="button" class="alert-yes">{"Yes"}</button>
                                <button type="button" class="alert-later">{"Later"}</button>
                            </div>
                        </Motion>
                    }) }
                </Stagger>

                <Motion variant={Variant::FadeUp} visible={in_view} class="proactive-tagline">
                    <p>
                        <strong>{"Never sleeps. Never misses anything."}</strong>
                        {" SAL works while you rest."}
                    </p>
                </Motion>
            </div>
        </section>
    }
}
