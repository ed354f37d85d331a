use std::rc::Rc;
use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD_PX;

/// Everything the navigation bar needs to decide how it looks.
///
/// `scrolled` is recomputed from the offset on every scroll notification,
/// `menu_open` only changes through the menu button and link activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavViewState {
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    LinkActivated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVariant {
    Overlay,
    Solid,
}

impl HeaderVariant {
    pub fn class(self) -> &'static str {
        match self {
            HeaderVariant::Overlay => "top-nav overlay",
            HeaderVariant::Solid => "top-nav solid",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Light,
    Dark,
}

impl Tone {
    fn dark_if(cond: bool) -> Self {
        if cond { Tone::Dark } else { Tone::Light }
    }

    pub fn class(self) -> &'static str {
        match self {
            Tone::Light => "tone-light",
            Tone::Dark => "tone-dark",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuGlyph {
    Burger(Tone),
    Close,
}

pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

impl NavViewState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(offset) => Self { scrolled: is_past_threshold(offset), ..self },
            NavAction::ToggleMenu => Self { menu_open: !self.menu_open, ..self },
            NavAction::LinkActivated => Self { menu_open: false, ..self },
        }
    }

    // An open mobile menu on an unscrolled page still needs the solid header.
    pub fn header_variant(&self) -> HeaderVariant {
        if self.scrolled || self.menu_open {
            HeaderVariant::Solid
        } else {
            HeaderVariant::Overlay
        }
    }

    pub fn brand_tone(&self) -> Tone {
        Tone::dark_if(self.header_variant() == HeaderVariant::Solid)
    }

    /// Desktop links only follow the scroll position.
    pub fn link_tone(&self) -> Tone {
        Tone::dark_if(self.scrolled)
    }

    pub fn menu_glyph(&self) -> MenuGlyph {
        if self.menu_open {
            MenuGlyph::Close
        } else {
            MenuGlyph::Burger(Tone::dark_if(self.scrolled))
        }
    }

    pub fn mobile_panel_class(&self) -> &'static str {
        if self.menu_open {
            "mobile-menu open"
        } else {
            "mobile-menu"
        }
    }
}

impl Reducible for NavViewState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self  // same Rc, no re-render
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_unscrolled_and_closed() {
        let state = NavViewState::default();
        assert!(!state.scrolled);
        assert!(!state.menu_open);
        assert_eq!(state.header_variant(), HeaderVariant::Overlay);
    }

    #[test]
    fn test_scrolled_tracks_offset_threshold() {
        for (offset, expected) in [
            (0.0, false),
            (19.9, false),
            (20.0, false),
            (20.5, true),
            (600.0, true),
            (-5.0, false),
        ] {
            let state = NavViewState::default().apply(NavAction::Scrolled(offset));
            assert_eq!(state.scrolled, expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_scrolled_is_not_a_latch() {
        let state = NavViewState::default()
            .apply(NavAction::Scrolled(300.0))
            .apply(NavAction::Scrolled(10.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn test_repeated_offset_is_idempotent() {
        let once = NavViewState::default().apply(NavAction::Scrolled(42.0));
        let twice = once.apply(NavAction::Scrolled(42.0));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_header_variant_for_all_combinations() {
        let cases = [
            (false, false, HeaderVariant::Overlay),
            (true, false, HeaderVariant::Solid),
            (false, true, HeaderVariant::Solid),
            (true, true, HeaderVariant::Solid),
        ];
        for (scrolled, menu_open, expected) in cases {
            let state = NavViewState { scrolled, menu_open };
            assert_eq!(state.header_variant(), expected, "{:?}", state);
        }
    }

    #[test]
    fn test_toggle_twice_restores_menu() {
        for start in [false, true] {
            let state = NavViewState { scrolled: false, menu_open: start };
            let toggled = state.apply(NavAction::ToggleMenu);
            assert_eq!(toggled.menu_open, !start);
            assert_eq!(toggled.apply(NavAction::ToggleMenu), state);
        }
    }

    #[test]
    fn test_menu_toggle_leaves_scrolled_alone() {
        let state = NavViewState { scrolled: true, menu_open: false }.apply(NavAction::ToggleMenu);
        assert!(state.scrolled);
    }

    #[test]
    fn test_link_activation_always_closes_menu() {
        for scrolled in [false, true] {
            for menu_open in [false, true] {
                let state = NavViewState { scrolled, menu_open }.apply(NavAction::LinkActivated);
                assert!(!state.menu_open);
                assert_eq!(state.scrolled, scrolled);
            }
        }
    }

    #[test]
    fn test_link_tone_ignores_menu() {
        let open = NavViewState { scrolled: false, menu_open: true };
        assert_eq!(open.link_tone(), Tone::Light);
        assert_eq!(open.brand_tone(), Tone::Dark);
    }

    #[test]
    fn test_menu_glyph() {
        assert_eq!(NavViewState { scrolled: true, menu_open: true }.menu_glyph(), MenuGlyph::Close);
        assert_eq!(
            NavViewState { scrolled: true, menu_open: false }.menu_glyph(),
            MenuGlyph::Burger(Tone::Dark)
        );
        assert_eq!(
            NavViewState::default().menu_glyph(),
            MenuGlyph::Burger(Tone::Light)
        );
    }

    #[test]
    fn test_reduce_reuses_state_when_unchanged() {
        let state = Rc::new(NavViewState::default());
        let same = state.clone().reduce(NavAction::Scrolled(5.0));
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.clone().reduce(NavAction::Scrolled(50.0));
        assert!(!Rc::ptr_eq(&state, &changed));
        assert!(changed.scrolled);
    }
}
