use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::BRAND_NAME;
use crate::content::NavLink;
use crate::navigation::anchors::{scroll_to_anchor, AnchorDocument, BrowserDocument};
use crate::navigation::scroll::{track_scroll, ScrollSource, WindowScroll};
use crate::navigation::state::{MenuGlyph, NavAction, NavViewState};

/// Scrolls to the link's anchor when it exists, then closes the menu either way.
pub fn activate_link<D: AnchorDocument>(
    document: &D,
    anchor: &str,
    dispatch: impl FnOnce(NavAction),
) {
    if scroll_to_anchor(document, anchor) {
        debug!("Scrolling to {}", anchor);
    }
    dispatch(NavAction::LinkActivated);
}

/// Mount half of the nav bar's scroll effect; the returned closure is the
/// unmount half and releases the subscription.
pub fn mount_scroll_tracking<S: ScrollSource>(
    source: &S,
    dispatch: impl Fn(NavAction) + 'static,
) -> impl FnOnce() {
    debug!("Navigation bar mounted");
    let subscription = track_scroll(source, dispatch);

    move || {
        drop(subscription);
        debug!("Navigation bar unmounted");
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub links: &'static [NavLink],
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let nav = use_reducer(NavViewState::default);

    {
        let nav = nav.clone();
        use_effect_with_deps(move |_| {
            mount_scroll_tracking(&WindowScroll, move |action| nav.dispatch(action))
        }, ());
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Menu toggled");
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let link_click = |anchor: &'static str| {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            activate_link(&BrowserDocument, anchor, |action| nav.dispatch(action));
        })
    };

    let state = *nav;
    let menu_button = match state.menu_glyph() {
        MenuGlyph::Close => html! { <span class="menu-glyph tone-dark">{"✕"}</span> },
        MenuGlyph::Burger(tone) => html! {
            <span class={classes!("menu-glyph", "burger", tone.class())}>
                <span></span>
                <span></span>
                <span></span>
            </span>
        },
    };

    html! {
        <nav class={state.header_variant().class()}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: all 0.3s ease;
                }
                .top-nav.overlay {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                    padding: 1.25rem 0;
                }
                .top-nav.solid {
                    background: #ffffff;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    padding: 0.75rem 0;
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 900;
                    font-size: 1.25rem;
                    text-transform: uppercase;
                    letter-spacing: -0.025em;
                }
                .nav-brand .brand-mark {
                    background: #ea580c;
                    padding: 0.5rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px -3px rgba(234, 88, 12, 0.2);
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .tone-light { color: #ffffff; }
                .nav-link.tone-light { color: rgba(255, 255, 255, 0.8); }
                .tone-dark { color: #0f172a; }
                .nav-link.tone-dark { color: #475569; }
                .nav-link:hover { color: #ea580c; }
                .menu-button {
                    display: none;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .menu-glyph { font-size: 1.5rem; }
                .burger {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                }
                .burger span {
                    display: block;
                    width: 24px;
                    height: 3px;
                    border-radius: 2px;
                    background: currentColor;
                }
                .mobile-menu {
                    display: none;
                    overflow: hidden;
                    max-height: 0;
                    opacity: 0;
                    transition: all 0.3s ease-in-out;
                }
                .mobile-menu.open {
                    max-height: 100vh;
                    opacity: 1;
                    padding: 2rem 0;
                    background: #ffffff;
                }
                .mobile-menu .mobile-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    align-items: center;
                }
                .mobile-menu a {
                    font-size: 1.125rem;
                    font-weight: 900;
                    color: #1e293b;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }
                @media (max-width: 1023px) {
                    .nav-links { display: none; }
                    .menu-button { display: block; }
                    .mobile-menu { display: block; }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-brand">
                    <span class="brand-mark">{"⚗️"}</span>
                    <span class={state.brand_tone().class()}>{BRAND_NAME}</span>
                </div>

                <div class="nav-links">
                    { for props.links.iter().map(|link| html! {
                        <a
                            key={link.name}
                            href={link.anchor}
                            onclick={link_click(link.anchor)}
                            class={classes!("nav-link", state.link_tone().class())}
                        >
                            {link.name}
                        </a>
                    }) }
                </div>

                <button class="menu-button" onclick={toggle_menu}>
                    {menu_button}
                </button>
            </div>

            <div class={state.mobile_panel_class()}>
                <div class="mobile-links">
                    { for props.links.iter().map(|link| html! {
                        <a key={link.name} href={link.anchor} onclick={link_click(link.anchor)}>
                            {link.name}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::anchors::testing::FakeDocument;
    use crate::navigation::scroll::testing::ManualScroll;
    use std::cell::Cell;
    use std::rc::Rc;

    fn activate(document: &FakeDocument, state: NavViewState, anchor: &str) -> NavViewState {
        let mut next = state;
        activate_link(document, anchor, |action| next = next.apply(action));
        next
    }

    #[test]
    fn test_existing_target_scrolls_and_closes_menu() {
        let document = FakeDocument::with_ids(&["features", "pricing"]);
        let state = NavViewState { scrolled: false, menu_open: true };

        let next = activate(&document, state, "#pricing");
        assert!(!next.menu_open);
        assert_eq!(document.scroll_calls(), 1);
    }

    #[test]
    fn test_missing_target_still_closes_menu() {
        let document = FakeDocument::with_ids(&["pricing"]);
        let state = NavViewState { scrolled: true, menu_open: true };

        let next = activate(&document, state, "#doesnotexist");
        assert!(!next.menu_open);
        assert!(next.scrolled);
        assert_eq!(document.scroll_calls(), 0);
    }

    #[test]
    fn test_every_nav_link_leaves_menu_closed() {
        // The page has no #objectives section, so one link takes the silent path.
        let document = FakeDocument::with_ids(&["features", "roadmap", "proof", "keywords", "pricing"]);
        for link in crate::content::NAV_LINKS {
            let next = activate(&document, NavViewState { scrolled: false, menu_open: true }, link.anchor);
            assert!(!next.menu_open, "{}", link.name);
        }
        assert_eq!(document.scroll_calls(), crate::content::NAV_LINKS.len() - 1);
    }

    #[test]
    fn test_mounted_nav_follows_scroll() {
        let source = ManualScroll::default();
        let state = Rc::new(Cell::new(NavViewState::default()));
        let _unmount = {
            let state = state.clone();
            mount_scroll_tracking(&source, move |action| state.set(state.get().apply(action)))
        };

        assert_eq!(source.listener_count(), 1);
        source.scroll_to(35.0);
        assert!(state.get().scrolled);
        source.scroll_to(20.0);
        assert!(!state.get().scrolled);
    }

    #[test]
    fn test_unmount_releases_scroll_listener() {
        let source = ManualScroll::default();
        let state = Rc::new(Cell::new(NavViewState::default()));
        let unmount = {
            let state = state.clone();
            mount_scroll_tracking(&source, move |action| state.set(state.get().apply(action)))
        };

        source.scroll_to(400.0);
        assert!(state.get().scrolled);

        unmount();
        assert_eq!(source.listener_count(), 0);

        source.scroll_to(0.0);
        assert!(state.get().scrolled);
    }
}
