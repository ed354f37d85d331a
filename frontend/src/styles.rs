use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Document-wide base styles, installed once by the app root.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            *, *::before, *::after {
                box-sizing: border-box;
            }
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                min-height: 100vh;
                background: #ffffff;
                color: #0f172a;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                -webkit-font-smoothing: antialiased;
            }
            .page-section {
                scroll-margin-top: 6rem;
            }
            img {
                max-width: 100%;
                display: block;
            }
        "#)} />
    }
}
