use yew::prelude::*;

use crate::components::{Icon, LucideIcon, Motion, Stagger};
use crate::content::VOICE_FEATURES;
use crate::hooks::use_in_view;
use crate::motion::Variant;

/// Upcoming phone capabilities.
#[function_component(VoiceCalls)]
pub fn voice_calls() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section ref={node} class="section dark">
            <style>
                {r#"
                    .voice-heading {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .voice-heading .icon { width: 2.5rem; height: 2.5rem; color: var(--gold); }
                    .voice-grid {
                        display: grid;
                        gap: 1rem;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    @media (min-width: 640px) {
                        .voice-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .voice-item {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: rgba(250, 247, 242, 0.1);
                        border-radius: 0.75rem;
                        padding: 1rem;
                        font-size: 0.875rem;
                    }
                    .voice-item .icon { width: 1.25rem; height: 1.25rem; color: var(--gold); flex-shrink: 0; }
                "#}
            </style>
            <div class="container">
                <Stagger visible={in_view} class="section-head tight">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <span class="section-label">{"Coming Soon"}</span>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={1}>
                        <h2 class="section-heading voice-heading">
                            <LucideIcon icon={Icon::PhoneCall} />
                            {"Voice Calls"}
                        </h2>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={2} tag="p" class="lead">
                        {"It's like having a personal assistant who actually calls you."}
                    </Motion>
                </Stagger>

                <Stagger visible={in_view} class="voice-grid">
                    { for VOICE_FEATURES.iter().enumerate().map(|(order, line)| html! {
                        <Motion key={order} variant={Variant::FadeUp} order={order} class="voice-item">
                            <LucideIcon icon={Icon::Mic} />
                            <span>{ *line }</span>
                        </Motion>
                    }) }
                </Stagger>
            </div>
        </section>
    }
}
