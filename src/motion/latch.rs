//! Small UI state machines driven by browser events.
//!
//! The one-way machines only expose forward actions, so there is no way to
//! dispatch them back into their starting state.

use std::rc::Rc;

use yew::Reducible;

use crate::config;

/// One-shot "has entered the viewport" flag for a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Reducible for VisibilityLatch {
    /// Latest intersection sample from the observer.
    type Action = bool;

    fn reduce(self: Rc<Self>, intersecting: bool) -> Rc<Self> {
        if self.visible || !intersecting {
            return self;
        }
        Rc::new(VisibilityLatch { visible: true })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Top,
    Scrolled,
}

impl NavState {
    pub fn from_offset(offset: f64) -> Self {
        if offset > config::NAV_SCROLL_THRESHOLD {
            NavState::Scrolled
        } else {
            NavState::Top
        }
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, NavState::Scrolled)
    }
}

impl Reducible for NavState {
    /// Vertical scroll offset in px.
    type Action = f64;

    fn reduce(self: Rc<Self>, offset: f64) -> Rc<Self> {
        let next = NavState::from_offset(offset);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Remote media with a local fallback once it fails to load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetState {
    #[default]
    Remote,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetEvent {
    LoadFailed,
}

impl AssetState {
    pub fn is_fallback(&self) -> bool {
        matches!(self, AssetState::Fallback)
    }
}

impl Reducible for AssetState {
    type Action = AssetEvent;

    fn reduce(self: Rc<Self>, action: AssetEvent) -> Rc<Self> {
        match (*self, action) {
            (AssetState::Remote, AssetEvent::LoadFailed) => Rc::new(AssetState::Fallback),
            (AssetState::Fallback, AssetEvent::LoadFailed) => self,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VideoState {
    #[default]
    Poster,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoEvent {
    Activated,
}

impl VideoState {
    pub fn is_playing(&self) -> bool {
        matches!(self, VideoState::Playing)
    }
}

impl Reducible for VideoState {
    type Action = VideoEvent;

    fn reduce(self: Rc<Self>, action: VideoEvent) -> Rc<Self> {
        match (*self, action) {
            (VideoState::Poster, VideoEvent::Activated) => Rc::new(VideoState::Playing),
            (VideoState::Playing, VideoEvent::Activated) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<R: Reducible>(start: R, actions: impl IntoIterator<Item = R::Action>) -> Rc<R> {
        actions
            .into_iter()
            .fold(Rc::new(start), |state, action| state.reduce(action))
    }

    #[test]
    fn latch_starts_hidden() {
        assert!(!VisibilityLatch::default().is_visible());
        assert!(!run(VisibilityLatch::default(), [false, false]).is_visible());
    }

    #[test]
    fn latch_stays_visible_after_leaving_viewport() {
        // enter on the way down, then scroll back up past it
        let latch = run(VisibilityLatch::default(), [false, true, false, false]);
        assert!(latch.is_visible());
    }

    #[test]
    fn latch_fires_only_once() {
        let first = Rc::new(VisibilityLatch::default()).reduce(true);
        let again = first.clone().reduce(true);
        assert!(Rc::ptr_eq(&first, &again));
    }

    #[test]
    fn nav_follows_offset_both_ways() {
        let top = Rc::new(NavState::default());
        let scrolled = top.reduce(80.0);
        assert_eq!(*scrolled, NavState::Scrolled);
        let back = scrolled.reduce(30.0);
        assert_eq!(*back, NavState::Top);
    }

    #[test]
    fn nav_threshold_is_exclusive() {
        assert_eq!(NavState::from_offset(50.0), NavState::Top);
        assert_eq!(NavState::from_offset(50.5), NavState::Scrolled);
        assert_eq!(NavState::from_offset(0.0), NavState::Top);
    }

    #[test]
    fn nav_keeps_identity_when_unchanged() {
        let scrolled = Rc::new(NavState::Scrolled);
        let same = scrolled.clone().reduce(400.0);
        assert!(Rc::ptr_eq(&scrolled, &same));
    }

    #[test]
    fn failed_asset_never_goes_back() {
        let state = run(AssetState::default(), [AssetEvent::LoadFailed]);
        assert!(state.is_fallback());
        let again = state.clone().reduce(AssetEvent::LoadFailed);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn video_plays_only_after_activation() {
        assert!(!VideoState::default().is_playing());
        let playing = run(VideoState::default(), [VideoEvent::Activated, VideoEvent::Activated]);
        assert_eq!(*playing, VideoState::Playing);
    }
}
