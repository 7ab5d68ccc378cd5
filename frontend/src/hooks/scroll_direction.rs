use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, WheelEvent};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderState {
    /// Header translated off-screen
    pub hidden: bool,
    /// Page scrolled away from the top, header gets its backdrop
    pub scrolled: bool,
}

/// Fuses wheel deltas and scroll positions into one header state.
///
/// Wheel events give an immediate direction; scroll positions cover touch
/// scrolling and keyboard paging where no wheel event fires. Both feed the
/// same `hidden` flag and the last event processed wins, so a single gesture
/// that produces both can flip the flag twice.
#[derive(Clone, Debug, Default)]
pub struct ScrollDirectionDetector {
    last_scroll_y: f64,
    state: HeaderState,
}

impl ScrollDirectionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> HeaderState {
        if delta_y > 0.0 {
            self.state.hidden = true;
            self.state.scrolled = true;
        } else if delta_y < 0.0 {
            self.state.hidden = false;
        }
        self.state
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> HeaderState {
        self.state.scrolled = scroll_y > config::NAV_SCROLLED_Y;

        if scroll_y > self.last_scroll_y && scroll_y > config::NAV_FORCE_SHOW_Y {
            self.state.hidden = true;
        } else if scroll_y < self.last_scroll_y {
            self.state.hidden = false;
        }
        // Top of the page always reveals the header
        if scroll_y <= config::NAV_FORCE_SHOW_Y {
            self.state.hidden = false;
        }

        self.last_scroll_y = scroll_y;
        self.state
    }
}

#[hook]
pub fn use_scroll_direction() -> HeaderState {
    let state = use_state_eq(HeaderState::default);
    let detector = use_mut_ref(ScrollDirectionDetector::new);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let on_wheel = {
                    let state = state.clone();
                    let detector = detector.clone();
                    Closure::wrap(Box::new(move |e: WheelEvent| {
                        state.set(detector.borrow_mut().on_wheel(e.delta_y()));
                    }) as Box<dyn FnMut(WheelEvent)>)
                };

                let on_scroll = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                        state.set(detector.borrow_mut().on_scroll(scroll_y));
                    }) as Box<dyn FnMut()>)
                };

                let options = AddEventListenerOptions::new();
                options.set_passive(true);

                if let Some(window) = window.as_ref() {
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        on_wheel.as_ref().unchecked_ref(),
                        &options,
                    );
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                        &options,
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref());
                        let _ = window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden_after(positions: &[f64]) -> Vec<bool> {
        let mut detector = ScrollDirectionDetector::new();
        positions.iter().map(|&y| detector.on_scroll(y).hidden).collect()
    }

    #[test]
    fn scroll_positions_drive_header_visibility() {
        assert_eq!(hidden_after(&[0.0, 10.0, 30.0, 20.0]), vec![false, true, true, false]);
    }

    #[test]
    fn near_top_always_shows_header() {
        // Moving down but still within 5px of the top
        assert_eq!(hidden_after(&[0.0, 3.0, 5.0]), vec![false, false, false]);

        let mut detector = ScrollDirectionDetector::new();
        detector.on_wheel(120.0);
        assert!(detector.state().hidden);
        assert!(!detector.on_scroll(4.0).hidden);
    }

    #[test]
    fn wheel_sign_hides_and_shows_immediately() {
        let mut detector = ScrollDirectionDetector::new();

        let down = detector.on_wheel(40.0);
        assert!(down.hidden);
        assert!(down.scrolled);

        let up = detector.on_wheel(-40.0);
        assert!(!up.hidden);
        // Backdrop flag is left to the scroll signal
        assert!(up.scrolled);

        assert_eq!(detector.on_wheel(0.0), up);
    }

    #[test]
    fn scrolled_flag_follows_position() {
        let mut detector = ScrollDirectionDetector::new();
        assert!(!detector.on_scroll(20.0).scrolled);
        assert!(detector.on_scroll(21.0).scrolled);
        assert!(!detector.on_scroll(0.0).scrolled);
    }

    #[test]
    fn last_event_wins_when_signals_disagree() {
        let mut detector = ScrollDirectionDetector::new();
        detector.on_scroll(100.0);
        detector.on_scroll(200.0);
        assert!(detector.state().hidden);

        // Wheel up while position still increases from momentum
        assert!(!detector.on_wheel(-10.0).hidden);
        assert!(detector.on_scroll(210.0).hidden);
    }
}
