use yew::prelude::*;

use crate::components::{Icon, LucideIcon, Motion, SectionHeading, SectionLabel, Stagger};
use crate::config;
use crate::content::{RAISE, USE_OF_FUNDS};
use crate::hooks::use_in_view;
use crate::motion::Variant;

/// The raise and where the money goes.
#[function_component(TheAsk)]
pub fn the_ask() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    html! {
        <section ref={node} class="section">
            <style>
                {r#"
                    .raise {
                        font-family: var(--font-display);
                        font-size: 2.25rem;
                        color: var(--gold);
                        text-align: center;
                        margin: 0 0 2rem;
                    }
                    .funds {
                        max-width: 40rem;
                        margin: 0 auto 3rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .fund-row-head {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        margin-bottom: 0.375rem;
                    }
                    .fund-row-head span:last-child { color: var(--warm-gray); }
                    .fund-bar {
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: var(--cream-dark);
                        overflow: hidden;
                    }
                    .fund-bar div {
                        height: 100%;
                        background: var(--gold);
                        border-radius: 9999px;
                    }
                "#}
            </style>
            <div class="container">
                <Stagger visible={in_view} class="section-head">
                    <Motion variant={Variant::FadeUp} order={0}>
                        <SectionLabel>{"The Ask"}</SectionLabel>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={1}>
                        <SectionHeading>{"We're Raising Our Pre-Seed"}</SectionHeading>
                    </Motion>
                    <Motion variant={Variant::FadeUp} order={2} tag="p" class="lead">
                        {"We're looking for investors who understand the beauty industry and want to \
                          back a founder who's lived the problem."}
                    </Motion>
                </Stagger>

                <Motion variant={Variant::FadeUp} visible={in_view} tag="p" class="raise">
                    { format!("{} pre-seed", RAISE) }
                </Motion>

                <Stagger visible={in_view} class="funds">
                    { for USE_OF_FUNDS.iter().enumerate().map(|(order, slice)| html! {
                        <Motion key={slice.category} variant={Variant::FadeUp} order={order}>
                            <div class="fund-row-head">
                                <span><strong>{ format!("{} {}%", slice.category, slice.percent) }</strong></span>
                                <span>{ slice.purpose }</span>
                            </div>
                            <div class="fund-bar">
                                <div style={format!("width: {}%;", slice.percent)}></div>
                            </div>
                        </Motion>
                    }) }
                </Stagger>

                <Motion variant={Variant::FadeUp} visible={in_view} class="cta-row">
                    <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer" class="btn btn-gold btn-large">
                        <LucideIcon icon={Icon::MessageSquare} />
                        {"Let's Talk"}
                    </a>
                </Motion>
            </div>
        </section>
    }
}
