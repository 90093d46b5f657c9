use log::info;
use yew::prelude::*;

use crate::motion::{AssetEvent, AssetState};

#[derive(Properties, PartialEq)]
pub struct TeamPhotoProps {
    pub src: AttrValue,
    pub initial: char,
    pub alt: AttrValue,
}

/// Portrait that falls back to an initial on a gold disc if the image fails.
#[function_component(TeamPhoto)]
pub fn team_photo(props: &TeamPhotoProps) -> Html {
    let state = use_reducer(AssetState::default);

    let onerror = {
        let state = state.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            if !state.is_fallback() {
                info!("portrait {} failed to load, showing initial", src);
            }
            state.dispatch(AssetEvent::LoadFailed);
        })
    };

    html! {
        <>
            <style>
                {r#"
                    .team-photo {
                        width: 8rem;
                        height: 8rem;
                        border-radius: 9999px;
                        object-fit: cover;
                    }
                    .team-photo-fallback {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, var(--gold), var(--gold-light));
                    }
                    .team-photo-fallback span {
                        font-family: var(--font-display);
                        font-size: 2.25rem;
                        color: #fff;
                    }
                "#}
            </style>
            {
                if state.is_fallback() {
                    html! {
                        <div class="team-photo team-photo-fallback" role="img" aria-label={props.alt.clone()}>
                            <span>{ props.initial.to_string() }</span>
                        </div>
                    }
                } else {
                    html! {
                        <img
                            class="team-photo"
                            src={props.src.clone()}
                            alt={props.alt.clone()}
                            width="128"
                            height="128"
                            onerror={onerror}
                        />
                    }
                }
            }
        </>
    }
}
