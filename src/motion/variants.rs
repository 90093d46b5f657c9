//! Named entrance animations.
//!
//! Every variant has exactly two frames, `Hidden` and `Visible`. A frame is
//! pure data: a pose plus the transition used to arrive at it. The browser's
//! CSS transitions do the interpolation between the two poses.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    FadeUp,
    FadeIn,
    StaggerContainer,
    ScaleIn,
    BlurIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionState {
    Hidden,
    Visible,
}

impl MotionState {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            MotionState::Visible
        } else {
            MotionState::Hidden
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Fast start with a long soft landing.
    pub const OUT_EXPO: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

    pub fn css(&self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    pub ease: Easing,
    /// Seconds before the transition starts.
    pub delay: f64,
    /// Extra delay per child, in render order, for container variants.
    pub stagger_children: Option<f64>,
}

impl Transition {
    const fn tween(duration: f64, ease: Easing) -> Self {
        Transition {
            duration,
            ease,
            delay: 0.0,
            stagger_children: None,
        }
    }
}

/// Rendered appearance of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in px; positive moves the element down.
    pub offset_y: f64,
    pub scale: f64,
    pub blur_px: f64,
}

impl Pose {
    pub const SETTLED: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
        blur_px: 0.0,
    };

    pub fn is_settled(&self) -> bool {
        *self == Pose::SETTLED
    }

    fn with_opacity(self, opacity: f64) -> Self {
        Pose { opacity, ..self }
    }

    pub fn css(&self) -> String {
        if self.is_settled() {
            return "opacity: 1; transform: none; filter: none;".to_string();
        }
        let mut css = format!("opacity: {};", self.opacity);
        if self.offset_y != 0.0 || self.scale != 1.0 {
            css.push_str(&format!(
                " transform: translateY({}px) scale({});",
                self.offset_y, self.scale
            ));
        } else {
            css.push_str(" transform: none;");
        }
        css.push_str(&format!(" filter: blur({}px);", self.blur_px));
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub pose: Pose,
    /// `None` snaps to the pose without animating.
    pub transition: Option<Transition>,
}

impl Frame {
    /// Inline style for this frame, pushed back by `extra_delay` seconds.
    pub fn css(&self, extra_delay: f64) -> String {
        let mut css = self.pose.css();
        match self.transition {
            Some(t) => {
                let delay = t.delay + extra_delay;
                let ease = t.ease.css();
                css.push_str(&format!(
                    " transition: opacity {d}s {e} {l}s, transform {d}s {e} {l}s, filter {d}s {e} {l}s;",
                    d = t.duration,
                    e = ease,
                    l = delay
                ));
            }
            None => css.push_str(" transition: none;"),
        }
        css
    }

    /// Delay that a container frame hands to its child at `order`.
    pub fn child_delay(&self, order: usize) -> f64 {
        self.transition
            .and_then(|t| t.stagger_children)
            .map(|step| step * order as f64)
            .unwrap_or(0.0)
    }
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::FadeUp => "fadeUp",
            Variant::FadeIn => "fadeIn",
            Variant::StaggerContainer => "staggerContainer",
            Variant::ScaleIn => "scaleIn",
            Variant::BlurIn => "blurIn",
        }
    }

    pub fn hidden(&self) -> Frame {
        let pose = match self {
            Variant::FadeUp => Pose {
                offset_y: 40.0,
                ..Pose::SETTLED
            },
            Variant::FadeIn | Variant::StaggerContainer => Pose::SETTLED,
            Variant::ScaleIn => Pose {
                scale: 0.9,
                ..Pose::SETTLED
            },
            Variant::BlurIn => Pose {
                blur_px: 10.0,
                ..Pose::SETTLED
            },
        };
        Frame {
            pose: pose.with_opacity(0.0),
            transition: None,
        }
    }

    pub fn visible(&self) -> Frame {
        let transition = match self {
            Variant::FadeUp | Variant::ScaleIn => Transition::tween(0.6, Easing::OUT_EXPO),
            Variant::FadeIn => Transition::tween(0.6, Easing::EaseOut),
            Variant::StaggerContainer => Transition {
                stagger_children: Some(0.1),
                ..Transition::tween(0.5, Easing::EaseOut)
            },
            Variant::BlurIn => Transition::tween(0.8, Easing::EaseOut),
        };
        Frame {
            pose: Pose::SETTLED,
            transition: Some(transition),
        }
    }

    pub fn frame(&self, state: MotionState) -> Frame {
        match state {
            MotionState::Hidden => self.hidden(),
            MotionState::Visible => self.visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Variant; 5] = [
        Variant::FadeUp,
        Variant::FadeIn,
        Variant::StaggerContainer,
        Variant::ScaleIn,
        Variant::BlurIn,
    ];

    /// Pose an element ends up in after the frames are applied in sequence.
    fn settle<I>(frames: I) -> Option<Pose>
    where
        I: IntoIterator<Item = Frame>,
    {
        frames.into_iter().last().map(|frame| frame.pose)
    }

    #[test]
    fn visible_is_settled_for_every_variant() {
        for variant in ALL {
            assert!(
                variant.visible().pose.is_settled(),
                "{} does not settle",
                variant.name()
            );
        }
    }

    #[test]
    fn reapplying_visible_stays_settled() {
        for variant in ALL {
            let once = settle([variant.hidden(), variant.visible()]);
            let many = settle([
                variant.hidden(),
                variant.visible(),
                variant.visible(),
                variant.visible(),
            ]);
            assert_eq!(once, Some(Pose::SETTLED));
            assert_eq!(once, many);
        }
    }

    #[test]
    fn hidden_is_transparent() {
        for variant in ALL {
            assert_eq!(variant.hidden().pose.opacity, 0.0);
        }
    }

    #[test]
    fn visible_durations_are_bounded() {
        for variant in ALL {
            let t = variant.visible().transition.expect("visible always animates");
            assert!(
                (0.5..=0.9).contains(&t.duration),
                "{} lasts {}s",
                variant.name(),
                t.duration
            );
        }
    }

    #[test]
    fn hidden_snaps_without_transition() {
        for variant in ALL {
            assert!(variant.hidden().transition.is_none());
        }
    }

    #[test]
    fn only_the_container_staggers() {
        let container = Variant::StaggerContainer.visible();
        assert_eq!(container.child_delay(0), 0.0);
        assert!((container.child_delay(3) - 0.3).abs() < 1e-9);

        for variant in [Variant::FadeUp, Variant::FadeIn, Variant::ScaleIn, Variant::BlurIn] {
            assert_eq!(variant.visible().child_delay(5), 0.0);
        }
    }

    #[test]
    fn hidden_offsets_per_variant() {
        assert_eq!(Variant::FadeUp.hidden().pose.offset_y, 40.0);
        assert_eq!(Variant::ScaleIn.hidden().pose.scale, 0.9);
        assert_eq!(Variant::BlurIn.hidden().pose.blur_px, 10.0);
        assert_eq!(Variant::FadeIn.hidden().pose.offset_y, 0.0);
    }

    #[test]
    fn frame_css_carries_delay_and_easing() {
        let css = Variant::FadeUp.visible().css(0.2);
        assert!(css.contains("opacity: 1;"));
        assert!(css.contains("transform: none;"));
        assert!(css.contains("cubic-bezier(0.22, 1, 0.36, 1) 0.2s"));

        let hidden = Variant::FadeUp.hidden().css(0.0);
        assert!(hidden.contains("translateY(40px)"));
        assert!(hidden.contains("transition: none;"));
    }

    #[test]
    fn motion_state_from_flag() {
        assert_eq!(MotionState::from_visible(true), MotionState::Visible);
        assert_eq!(MotionState::from_visible(false), MotionState::Hidden);
    }
}
