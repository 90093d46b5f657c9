use yew::prelude::*;

use crate::components::{DemoVideo, Icon, LucideIcon, Motion, SectionHeading, SectionLabel, Stagger};
use crate::config;
use crate::hooks::use_in_view;
use crate::motion::Variant;

#[function_component(Demo)]
pub fn demo() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section id="demo" ref={node} class="section">
            <div class="container">
                <Stagger visible={in_view} class="section-head tight">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <SectionLabel>{"See It In Action"}</SectionLabel>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={1}>
                        <SectionHeading>{"Watch SAL Handle Real Scenarios"}</SectionHeading>
                    </Motion>
                </Stagger>

                <Motion variant={Variant::ScaleIn} visible={in_view} class="centered">
                    <DemoVideo />
                </Motion>

                <Motion variant={Variant::FadeUp} visible={in_view} class="cta-row">
                    <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp">
                        <LucideIcon icon={Icon::MessageSquare} />
                        {"Message SAL Now to Try It Live"}
                    </a>
                </Motion>
            </div>
        </section>
    }
}
