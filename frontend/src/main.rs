use yew::prelude::*;
use log::info;

mod config;
mod content;
mod styles;
mod navigation {
    pub mod anchors;
    pub mod nav_bar;
    pub mod scroll;
    pub mod state;
}
mod components {
    pub mod cards;
    pub mod section_header;
}
mod pages {
    pub mod proposal;
}

use content::NAV_LINKS;
use navigation::nav_bar::NavBar;
use pages::proposal::Proposal;
use styles::GlobalStyles;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <GlobalStyles />
            <NavBar links={NAV_LINKS} />
            <Proposal />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
