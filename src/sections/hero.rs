use yew::prelude::*;

use crate::components::{Icon, LucideIcon, Motion, Stagger};
use crate::content::HERO_STATS;
use crate::hooks::use_mount_reveal;
use crate::motion::Variant;

/// Opening pitch. Animates on load rather than on scroll.
#[function_component(Hero)]
pub fn hero() -> Html {
    let revealed = use_mount_reveal();

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 6rem 1.5rem 3rem;
                        position: relative;
                        text-align: center;
                    }
                    .hero-inner { max-width: 56rem; margin: 0 auto; }
                    .hero-badge {
                        display: inline-block;
                        background: var(--gold-subtle);
                        color: var(--gold);
                        font-size: 0.875rem;
                        font-weight: 500;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 {
                        font-family: var(--font-display);
                        font-weight: 400;
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        line-height: 1.15;
                        margin: 0 0 1.5rem;
                    }
                    .hero-copy {
                        font-size: 1.2rem;
                        color: var(--charcoal-light);
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                        line-height: 1.65;
                    }
                    .hero-ctas {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 36rem;
                        margin: 0 auto;
                    }
                    .hero-stat-value {
                        font-family: var(--font-display);
                        font-size: 1.875rem;
                        color: var(--gold);
                        margin: 0;
                    }
                    .hero-stat-label { color: var(--warm-gray); font-size: 0.875rem; margin: 0; }
                    .scroll-cue {
                        position: absolute;
                        bottom: 2rem;
                        color: var(--warm-gray);
                        opacity: 0;
                        animation: cue-in 0.5s ease 1s forwards, cue-bounce 1.5s ease-in-out 1s infinite;
                    }
                    .scroll-cue .icon { width: 1.5rem; height: 1.5rem; }
                    @keyframes cue-in { to { opacity: 1; } }
                    @keyframes cue-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }
                "#}
            </style>
            <div class="hero-inner">
                <Motion variant={Variant::FadeIn} visible={revealed} class="hero-badge">
                    {"Investor Preview"}
                </Motion>

                <Motion variant={Variant::BlurIn} visible={revealed} tag="h1">
                    {"An AI Employee That Runs Your Entire Business Through WhatsApp"}
                </Motion>

                <Motion variant={Variant::FadeUp} visible={revealed} delay={0.2} tag="p" class="hero-copy">
                    {"SAL monitors your salon 24/7, alerts you when something needs attention, \
                      manages your team, analyzes your data, and handles operations \u{2014} \
                      so you can focus on what you do best."}
                </Motion>

                <Motion variant={Variant::FadeUp} visible={revealed} delay={0.4} class="hero-ctas">
                    <a href="#features" class="btn btn-gold">{"See What SAL Can Do"}</a>
                    <a href="#demo" class="btn btn-outline">{"Watch Demo"}</a>
                </Motion>

                <Stagger visible={revealed} class="hero-stats">
                    { for HERO_STATS.iter().enumerate().map(|(order, stat)| html! {
                        <Motion key={stat.label} variant={Variant::FadeUp} order={order}>
                            <p class="hero-stat-value">{ stat.value }</p>
                            <p class="hero-stat-label">{ stat.label }</p>
                        </Motion>
                    }) }
                </Stagger>
            </div>

            <div class="scroll-cue">
                <LucideIcon icon={Icon::ChevronDown} />
            </div>
        </section>
    }
}
