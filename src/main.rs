use log::{info, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlHeadElement};
use yew::prelude::*;

mod components;
mod config;
mod content;
mod hooks;
mod motion;
mod sections;
mod pages {
    pub mod investor;
}

use hooks::{use_mount_reveal, use_nav_state};
use motion::variants::Easing;
use motion::MotionState;
use pages::investor::InvestorPage;

#[function_component(Nav)]
pub fn nav() -> Html {
    let nav_state = use_nav_state();
    let arrived = use_mount_reveal();

    // Slides down from above the viewport once mounted
    let slide = match MotionState::from_visible(arrived) {
        MotionState::Hidden => "transform: translateY(-100px);".to_string(),
        MotionState::Visible => format!(
            "transform: translateY(0); transition: transform 0.6s {}, background 0.3s, box-shadow 0.3s;",
            Easing::EaseOut
        ),
    };

    html! {
        <nav class={classes!("top-nav", nav_state.is_scrolled().then(|| "scrolled"))} style={slide}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(250, 247, 242, 0.8);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-family: var(--font-display);
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: var(--charcoal);
                        text-decoration: none;
                    }
                    .nav-cta {
                        background: var(--gold);
                        color: #fff;
                        padding: 0.625rem 1.25rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.2s, transform 0.2s;
                    }
                    .nav-cta:hover {
                        background: var(--gold-light);
                        transform: scale(1.05);
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"SAL"}</a>
                <a href="#contact" class="nav-cta">{"Schedule a Call"}</a>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <InvestorPage />
        </>
    }
}

/// Updates the `<meta>` tag matching `attr`/`key`, creating it when missing.
fn upsert_meta(
    document: &Document,
    head: &HtmlHeadElement,
    attr: &str,
    key: &str,
    content: &str,
) -> Result<(), JsValue> {
    let tag = match document.query_selector(&config::meta_selector(attr, key))? {
        Some(tag) => tag,
        None => {
            let tag = document.create_element("meta")?;
            tag.set_attribute(attr, key)?;
            head.append_child(&tag)?;
            tag
        }
    };
    tag.set_attribute("content", content)
}

/// Mirrors `config::PAGE_META` into the document head.
fn apply_page_meta() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("no document, skipping page metadata");
        return;
    };
    let meta = &config::PAGE_META;
    document.set_title(meta.title);

    let Some(head) = document.head() else {
        warn!("document has no <head>, skipping meta tags");
        return;
    };
    for (attr, key, content) in meta.tags() {
        if let Err(err) = upsert_meta(&document, &head, attr, key, &content) {
            warn!("could not write meta tag {}: {:?}", key, err);
        }
    }
    info!("page metadata applied");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting investor site");
    apply_page_meta();
    yew::Renderer::<App>::new().render();
}
