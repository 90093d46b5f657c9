use yew::prelude::*;

use crate::components::{FounderVideo, Icon, LucideIcon, Motion, SectionHeading, SectionLabel, Stagger};
use crate::config;
use crate::content::{FOUNDER_HIGHLIGHTS, FOUNDER_QUOTE};
use crate::hooks::use_in_view;
use crate::motion::Variant;

#[function_component(FounderStory)]
pub fn founder_story() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section id="story" ref={node} class="section alt">
            <style>
                {r#"
                    .story-grid {
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (min-width: 768px) {
                        .story-grid { grid-template-columns: 1fr 1fr; }
                    }
                    .story-video {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .story-quote {
                        margin: 0 0 2rem;
                        font-family: var(--font-display);
                        font-style: italic;
                        font-size: 1.375rem;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="container">
                <Stagger visible={in_view} class="section-head tight">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <SectionLabel>{"Our Story"}</SectionLabel>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={1}>
                        <SectionHeading>{"Built by a Barber Who Lived the Problem"}</SectionHeading>
                    </Motion>
                </Stagger>

                <div class="story-grid">
                    <Motion variant={Variant::ScaleIn} visible={in_view} class="story-video">
                        <FounderVideo source={config::FOUNDER_VIDEO} />
                    </Motion>

                    <Stagger visible={in_view}>
                        <Motion variant={Variant::FadeUp} order={0} tag="blockquote" class="story-quote">
                            { format!("\u{201c}{}\u{201d}", FOUNDER_QUOTE) }
                        </Motion>
                        <Motion variant={Variant::FadeUp} order={1} class="check-list">
                            { for FOUNDER_HIGHLIGHTS.iter().map(|line| html! {
                                <div class="check-item" key={*line}>
                                    <LucideIcon icon={Icon::Check} />
                                    <p>{ *line }</p>
                                </div>
                            }) }
                        </Motion>
                    </Stagger>
                </div>
            </div>
        </section>
    }
}
