use yew::prelude::*;

use crate::components::{Motion, SectionHeading, SectionLabel, Stagger};
use crate::content::WHATSAPP_REASONS;
use crate::hooks::use_in_view;
use crate::motion::Variant;

#[function_component(WhyWhatsApp)]
pub fn why_whatsapp() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section ref={node} class="section alt">
            <div class="container">
                <Stagger visible={in_view} class="section-head tight">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <SectionLabel>{"Why WhatsApp?"}</SectionLabel>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={1}>
                        <SectionHeading>{"Your Team Already Uses It Every Day"}</SectionHeading>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={2} tag="p" class="lead">
                        {"No dashboards to learn. No apps to download. No training needed. \
                          SAL works where your team already is: WhatsApp."}
                    </Motion>
                </Stagger>

                <Stagger visible={in_view} class="grid grid-4">
                    { for WHATSAPP_REASONS.iter().enumerate().map(|(order, reason)| html! {
                        <Motion key={reason.label} variant={Variant::FadeUp} order={order} class="card stat-card">
                            <p class="stat-value">{ reason.value }</p>
                            <p class="stat-label">{ reason.label }</p>
                        </Motion>
                    }) }
                </Stagger>
            </div>
        </section>
    }
}
