use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionLabel)]
pub fn section_label(props: &TextProps) -> Html {
    html! {
        <span class="section-label">{ for props.children.iter() }</span>
    }
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &TextProps) -> Html {
    html! {
        <h2 class="section-heading">{ for props.children.iter() }</h2>
    }
}
