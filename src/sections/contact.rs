use yew::prelude::*;

use crate::components::{Icon, LucideIcon, Motion, Stagger};
use crate::config;
use crate::hooks::use_in_view;
use crate::motion::Variant;

#[function_component(Contact)]
pub fn contact() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section id="contact" ref={node} class="section dark">
            <style>
                {r#"
                    .contact-inner { max-width: 48rem; margin: 0 auto; text-align: center; }
                    .contact-inner h2 { margin-bottom: 1.5rem; }
                    .contact-copy { color: rgba(250, 247, 242, 0.7); margin: 0 0 2.5rem; }
                    .contact-links {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: center;
                        margin-bottom: 2rem;
                    }
                    @media (min-width: 640px) {
                        .contact-links { flex-direction: row; }
                    }
                    .contact-note { color: rgba(250, 247, 242, 0.5); font-size: 0.875rem; margin: 0; }
                "#}
            </style>
            <Stagger visible={in_view} class="contact-inner">
                <Motion variant={Variant::FadeUp} order={0} tag="h2" class="section-heading">
                    {"Let's Talk"}
                </Motion>
                <Motion variant={Variant::FadeUp} order={1} tag="p" class="contact-copy">
                    {"See SAL in action. Discuss the opportunity. We'd love to share more."}
                </Motion>
                <Motion variant={Variant::FadeUp} order={2} class="contact-links">
                    <a href={config::mailto_link()} class="btn btn-cream">
                        <LucideIcon icon={Icon::Mail} />
                        { config::CONTACT_EMAIL }
                    </a>
                    <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer" class="btn btn-whatsapp">
                        <LucideIcon icon={Icon::MessageSquare} />
                        { config::WHATSAPP_DISPLAY }
                    </a>
                </Motion>
                <Motion variant={Variant::FadeUp} order={3} tag="p" class="contact-note">
                    {"Message SAL on WhatsApp to see it in action"}
                </Motion>
            </Stagger>
        </section>
    }
}
