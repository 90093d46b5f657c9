use log::{debug, info};
use yew::prelude::*;

use crate::components::icon::{Icon, LucideIcon};
use crate::config::{self, VideoSource};
use crate::motion::{AssetEvent, AssetState, VideoEvent, VideoState};

#[derive(Properties, PartialEq)]
pub struct FounderVideoProps {
    pub source: VideoSource,
}

/// Muted preview with a play button until the visitor asks for playback.
#[function_component(FounderVideo)]
pub fn founder_video(props: &FounderVideoProps) -> Html {
    let state = use_reducer(VideoState::default);

    let onplay = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("founder video activated");
            state.dispatch(VideoEvent::Activated);
        })
    };

    let body = match (props.source, state.is_playing()) {
        (VideoSource::None, _) => html! {
            <div class="video-placeholder">
                <div class="video-placeholder-disc">
                    <LucideIcon icon={Icon::Play} class="play-glyph" />
                </div>
                <p>{"Founder video coming soon"}</p>
            </div>
        },
        (VideoSource::Local(src), true) => html! {
            <video class="video-fill" src={src} controls={true} autoplay={true} playsinline={true} />
        },
        (VideoSource::YouTube(id), true) => html! {
            <iframe
                class="video-fill"
                src={config::youtube_embed_url(id)}
                title="Founder story"
                allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen={true}
            />
        },
        (source, false) => {
            let preview = match source {
                VideoSource::Local(src) => html! {
                    <video class="video-fill" src={src} muted={true} playsinline={true} preload="metadata" />
                },
                VideoSource::YouTube(id) => html! {
                    <img class="video-fill" src={format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id)} alt="" />
                },
                VideoSource::None => html! {},
            };
            html! {
                <button class="video-poster" onclick={onplay} aria-label="Play founder video">
                    { preview }
                    <div class="video-shade"></div>
                    <div class="video-play">
                        <div class="video-play-disc">
                            <LucideIcon icon={Icon::Play} class="play-glyph" fill="white" />
                        </div>
                    </div>
                </button>
            }
        }
    };

    html! {
        <>
            <style>
                {r#"
                    .video-fill {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border: 0;
                    }
                    .video-poster {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        padding: 0;
                        border: 0;
                        cursor: pointer;
                        background: #000;
                    }
                    .video-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.3);
                        transition: background 0.2s;
                    }
                    .video-poster:hover .video-shade {
                        background: rgba(0, 0, 0, 0.4);
                    }
                    .video-play {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .video-play-disc {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        background: var(--gold);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                        transition: transform 0.2s;
                    }
                    .video-poster:hover .video-play-disc {
                        transform: scale(1.1);
                    }
                    .video-play-disc .play-glyph {
                        width: 2rem;
                        height: 2rem;
                        color: #fff;
                        margin-left: 0.25rem;
                    }
                    .video-placeholder {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, var(--cream-dark), var(--gold-subtle));
                        color: var(--warm-gray);
                        font-weight: 500;
                    }
                    .video-placeholder-disc {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        background: rgba(184, 147, 90, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                        color: var(--gold);
                    }
                    .video-placeholder-disc .play-glyph {
                        width: 2rem;
                        height: 2rem;
                        margin-left: 0.25rem;
                    }
                "#}
            </style>
            { body }
        </>
    }
}

/// Product demo inside a phone frame; shows a placeholder if the clip is missing.
#[function_component(DemoVideo)]
pub fn demo_video() -> Html {
    let state = use_reducer(AssetState::default);

    let onerror = {
        let state = state.clone();
        Callback::from(move |_: Event| {
            if !state.is_fallback() {
                info!("demo video {} unavailable, showing placeholder", config::DEMO_VIDEO_PATH);
            }
            state.dispatch(AssetEvent::LoadFailed);
        })
    };

    html! {
        <div class="phone">
            <style>
                {r#"
                    .phone {
                        position: relative;
                        background: var(--charcoal);
                        border-radius: 3rem;
                        padding: 0.75rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .phone-button {
                        position: absolute;
                        width: 0.25rem;
                        background: var(--charcoal-light);
                    }
                    .phone-button.left { left: -0.25rem; border-radius: 2px 0 0 2px; }
                    .phone-button.right { right: -0.25rem; border-radius: 0 2px 2px 0; }
                    .phone-bezel {
                        position: relative;
                        background: #000;
                        border-radius: 2.5rem;
                        overflow: hidden;
                    }
                    .phone-island {
                        position: absolute;
                        top: 0.75rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 20;
                        width: 7rem;
                        height: 2rem;
                        background: #000;
                        border-radius: 9999px;
                    }
                    .phone-screen {
                        position: relative;
                        width: 270px;
                        aspect-ratio: 9 / 16;
                        background: #000;
                    }
                    @media (min-width: 640px) {
                        .phone-screen { width: 300px; }
                    }
                    .phone-screen video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .phone-screen .demo-placeholder {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--warm-gray);
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="phone-button left" style="top: 7rem; height: 2rem;"></div>
            <div class="phone-button left" style="top: 10rem; height: 3rem;"></div>
            <div class="phone-button left" style="top: 14rem; height: 3rem;"></div>
            <div class="phone-button right" style="top: 9rem; height: 4rem;"></div>
            <div class="phone-bezel">
                <div class="phone-island"></div>
                <div class="phone-screen">
                    {
                        if state.is_fallback() {
                            html! { <div class="demo-placeholder">{"Demo coming soon"}</div> }
                        } else {
                            html! {
                                <video
                                    src={config::DEMO_VIDEO_PATH}
                                    controls={true}
                                    playsinline={true}
                                    preload="metadata"
                                    onerror={onerror}
                                />
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}
