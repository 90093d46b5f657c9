use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"\u{a9} 2026 SAL. Dubai, UAE."}</p>
        </footer>
    }
}
