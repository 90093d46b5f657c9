use yew::prelude::*;

use crate::motion::variants::{Frame, MotionState, Variant};

/// What a `Stagger` container hands down to its `Motion` children.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealContext {
    pub visible: bool,
    pub container: Frame,
}

#[derive(Properties, PartialEq)]
pub struct MotionProps {
    pub variant: Variant,
    /// Overrides the enclosing `Stagger` container's state.
    #[prop_or_default]
    pub visible: Option<bool>,
    /// Position among the container's children, in render order.
    #[prop_or_default]
    pub order: usize,
    /// Seconds added on top of any stagger delay.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Picks the state and total delay for a `Motion` child.
///
/// An explicit `visible` wins over the container and opts out of its stagger.
/// Without a state from either source the content is shown.
fn resolve(
    visible: Option<bool>,
    reveal: Option<&RevealContext>,
    order: usize,
    delay: f64,
) -> (MotionState, f64) {
    match (visible, reveal) {
        (Some(visible), _) => (MotionState::from_visible(visible), delay),
        (None, Some(reveal)) => (
            MotionState::from_visible(reveal.visible),
            delay + reveal.container.child_delay(order),
        ),
        (None, None) => (MotionState::Visible, delay),
    }
}

/// Renders its children in the variant's hidden or visible frame.
#[function_component(Motion)]
pub fn motion(props: &MotionProps) -> Html {
    let reveal = use_context::<RevealContext>();
    let (state, delay) = resolve(props.visible, reveal.as_ref(), props.order, props.delay);
    let style = props.variant.frame(state).css(delay);

    html! {
        <@{props.tag}
            id={props.id.clone()}
            class={props.class.clone()}
            style={style}
            data-variant={props.variant.name()}
        >
            { for props.children.iter() }
        </@>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerProps {
    pub visible: bool,
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades in as a group and releases its `Motion` children one step apart.
#[function_component(Stagger)]
pub fn stagger(props: &StaggerProps) -> Html {
    let state = MotionState::from_visible(props.visible);
    let frame = Variant::StaggerContainer.frame(state);
    let context = RevealContext {
        visible: props.visible,
        container: Variant::StaggerContainer.visible(),
    };

    html! {
        <ContextProvider<RevealContext> context={context}>
            <@{props.tag} class={props.class.clone()} style={frame.css(0.0)}>
                { for props.children.iter() }
            </@>
        </ContextProvider<RevealContext>>
    }
}

/// Disables every transition and keyframe animation when the visitor asks for
/// reduced motion. Unscoped so it also covers the nav outside the page root.
pub const REDUCED_MOTION_CSS: &str = r#"
    @media (prefers-reduced-motion: reduce) {
        *, *::before, *::after { transition: none !important; animation: none !important; }
        .scroll-cue { opacity: 1; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn container(visible: bool) -> RevealContext {
        RevealContext {
            visible,
            container: Variant::StaggerContainer.visible(),
        }
    }

    #[test]
    fn shows_content_without_any_state() {
        assert_eq!(resolve(None, None, 3, 0.0), (MotionState::Visible, 0.0));
    }

    #[test]
    fn follows_container_and_staggers_by_order() {
        let (state, delay) = resolve(None, Some(&container(true)), 2, 0.1);
        assert_eq!(state, MotionState::Visible);
        assert!((delay - 0.3).abs() < 1e-9);

        let (state, _) = resolve(None, Some(&container(false)), 2, 0.0);
        assert_eq!(state, MotionState::Hidden);
    }

    #[test]
    fn explicit_visible_overrides_container() {
        let (state, _) = resolve(Some(true), Some(&container(false)), 0, 0.0);
        assert_eq!(state, MotionState::Visible);

        let (state, _) = resolve(Some(false), Some(&container(true)), 0, 0.0);
        assert_eq!(state, MotionState::Hidden);
    }

    #[test]
    fn explicit_visible_skips_stagger_delay() {
        let (_, delay) = resolve(Some(true), Some(&container(true)), 4, 0.2);
        assert_eq!(delay, 0.2);
    }

    #[test]
    fn hidden_content_stays_in_layout() {
        let (state, delay) = resolve(None, Some(&container(false)), 1, 0.0);
        let css = Variant::FadeUp.frame(state).css(delay);
        assert!(css.contains("opacity: 0;"));
        assert!(!css.contains("display"));
        assert!(!css.contains("visibility"));
    }

    #[test]
    fn reduced_motion_is_not_scoped_to_the_page() {
        assert!(REDUCED_MOTION_CSS.contains("prefers-reduced-motion: reduce"));
        assert!(REDUCED_MOTION_CSS.contains("*, *::before, *::after"));
        assert!(!REDUCED_MOTION_CSS.contains(".investor-page"));
    }
}
