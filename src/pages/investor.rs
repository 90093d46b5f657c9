use yew::prelude::*;

use crate::components::REDUCED_MOTION_CSS;

use crate::sections::{
    Contact, CoreFeatures, Demo, Footer, FounderStory, Hero, ProactiveIntelligence, Team,
    TheAsk, Traction, VoiceCalls, WhyInvest, WhyWhatsApp,
};

/// The whole investor deck, top to bottom.
#[function_component(InvestorPage)]
pub fn investor_page() -> Html {
    html! {
        <main class="investor-page">
            <style>
                {r#"
                    :root {
                        --cream: #FAF7F2;
                        --cream-dark: #F3EDE4;
                        --warm-white: #FFFDF9;
                        --charcoal: #2B2B2B;
                        --charcoal-light: #5A5550;
                        --warm-gray: #9A9189;
                        --gold: #B8935A;
                        --gold-light: #CBA876;
                        --gold-subtle: #F4EBDD;
                        --sage: #7A8F6E;
                        --terracotta: #C0674A;
                        --deep-brown: #2E2119;
                        --font-display: 'Playfair Display', Georgia, serif;
                        --font-body: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    }
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        background: var(--cream);
                        color: var(--charcoal);
                        font-family: var(--font-body);
                        -webkit-font-smoothing: antialiased;
                    }
                    .investor-page { background: var(--cream); overflow-x: hidden; }

                    .section { padding: 6rem 1.5rem; }
                    .section.alt { background: var(--cream-dark); }
                    .section.dark { background: var(--deep-brown); color: var(--cream); }
                    .container { max-width: 64rem; margin: 0 auto; }
                    .container.wide { max-width: 72rem; }
                    .section-head { text-align: center; margin-bottom: 4rem; }
                    .section-head.tight { margin-bottom: 3rem; }
                    .section-label {
                        display: inline-block;
                        font-size: 0.75rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: var(--gold);
                        margin-bottom: 1rem;
                    }
                    .section-heading {
                        font-family: var(--font-display);
                        font-weight: 400;
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        line-height: 1.2;
                        margin: 0;
                    }
                    .lead {
                        color: var(--charcoal-light);
                        max-width: 42rem;
                        margin: 1rem auto 0;
                        font-size: 1.05rem;
                    }
                    .section.dark .lead { color: rgba(250, 247, 242, 0.7); }
                    .centered { display: flex; justify-content: center; }
                    .cta-row { text-align: center; margin-top: 2.5rem; }

                    .card {
                        background: var(--warm-white);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: box-shadow 0.2s;
                    }
                    .card:hover { box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); }
                    .card-title {
                        font-family: var(--font-display);
                        font-weight: 400;
                        font-size: 1.25rem;
                    }
                    .stat-card { text-align: center; }
                    .stat-value {
                        font-family: var(--font-display);
                        font-size: 2.25rem;
                        color: var(--gold);
                        margin: 0 0 0.5rem;
                    }
                    .stat-label { color: var(--charcoal-light); font-size: 0.875rem; margin: 0; }

                    .grid { display: grid; gap: 1.5rem; }
                    .grid-2 { gap: 2rem; }
                    .grid-4 { grid-template-columns: repeat(2, 1fr); }
                    @media (min-width: 768px) {
                        .grid-2, .grid-3 { grid-template-columns: repeat(2, 1fr); }
                        .grid-4 { grid-template-columns: repeat(4, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .grid-3 { grid-template-columns: repeat(3, 1fr); }
                    }

                    .icon { width: 1.25rem; height: 1.25rem; }
                    .icon-disc {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: var(--gold-subtle);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                    }
                    .tone-gold { color: var(--gold); }
                    .tone-sage { color: var(--sage); }
                    .tone-terracotta { color: var(--terracotta); }

                    .check-list { display: flex; flex-direction: column; gap: 0.75rem; }
                    .check-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        color: var(--charcoal-light);
                    }
                    .check-item p { margin: 0; }
                    .check-item .icon { color: var(--gold); flex-shrink: 0; margin-top: 0.15rem; }

                    .btn {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.2s, border-color 0.2s, transform 0.2s;
                    }
                    .btn-large { padding: 1rem 2rem; font-size: 1.125rem; }
                    .btn-gold { background: var(--gold); color: #fff; }
                    .btn-gold:hover { background: var(--gold-light); transform: scale(1.05); }
                    .btn-outline {
                        background: #fff;
                        color: var(--charcoal);
                        border: 2px solid rgba(43, 43, 43, 0.2);
                    }
                    .btn-outline:hover { border-color: var(--gold); }
                    .btn-whatsapp { background: #25D366; color: #fff; padding: 0.75rem 1.5rem; }
                    .btn-whatsapp:hover { background: rgba(37, 211, 102, 0.9); }
                    .btn-cream { background: var(--cream); color: var(--deep-brown); padding: 0.75rem 1.5rem; }
                    .btn-cream:hover { background: rgba(250, 247, 242, 0.9); }

                    .footer {
                        padding: 2rem 1.5rem;
                        background: var(--deep-brown);
                        border-top: 1px solid rgba(250, 247, 242, 0.1);
                        text-align: center;
                    }
                    .footer p { margin: 0; color: rgba(250, 247, 242, 0.5); font-size: 0.875rem; }
                "#}
            </style>
            <style>{ REDUCED_MOTION_CSS }</style>
            <Hero />
            <FounderStory />
            <ProactiveIntelligence />
            <CoreFeatures />
            <VoiceCalls />
            <Demo />
            <WhyWhatsApp />
            <Team />
            <Traction />
            <TheAsk />
            <WhyInvest />
            <Contact />
            <Footer />
        </main>
    }
}
