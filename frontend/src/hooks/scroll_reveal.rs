use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Lifecycle of a single reveal observation.
///
/// An element starts `Observing`, moves to `Triggered` on its first
/// intersection and ends `Disposed` when its owner unmounts. Nothing moves
/// back, so a revealed element stays revealed even if it leaves the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Observing,
    Triggered,
    Disposed { revealed: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealLatch {
    phase: RevealPhase,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealLatch {
    pub fn new() -> Self {
        Self { phase: RevealPhase::Observing }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Feed one intersection report. Returns true only for the report that
    /// flips the latch, which is the caller's cue to stop observing.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && self.phase == RevealPhase::Observing {
            self.phase = RevealPhase::Triggered;
            return true;
        }
        false
    }

    pub fn dispose(&mut self) {
        let revealed = self.is_revealed();
        self.phase = RevealPhase::Disposed { revealed };
    }

    pub fn is_revealed(&self) -> bool {
        matches!(
            self.phase,
            RevealPhase::Triggered | RevealPhase::Disposed { revealed: true }
        )
    }
}

/// Fixed-size collection of latches, one per tracked element.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RevealSet {
    latches: Vec<RevealLatch>,
}

pub enum RevealSetAction {
    Reset(usize),
    Reveal(usize),
}

impl RevealSet {
    pub fn with_len(count: usize) -> Self {
        Self { latches: vec![RevealLatch::new(); count] }
    }

    pub fn len(&self) -> usize {
        self.latches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latches.is_empty()
    }

    /// Out-of-range indices are ignored.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.latches
            .get_mut(index)
            .map(|latch| latch.observe(true))
            .unwrap_or(false)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.latches.get(index).map(RevealLatch::is_revealed).unwrap_or(false)
    }

    pub fn flags(&self) -> Vec<bool> {
        self.latches.iter().map(RevealLatch::is_revealed).collect()
    }
}

impl Reducible for RevealSet {
    type Action = RevealSetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealSetAction::Reset(count) => Rc::new(Self::with_len(count)),
            RevealSetAction::Reveal(index) => {
                if self.is_revealed(index) || index >= self.len() {
                    return self;
                }
                let mut next = (*self).clone();
                next.reveal(index);
                Rc::new(next)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN,
        }
    }
}

impl RevealOptions {
    /// Used by heavy hero backgrounds that should mount just before they
    /// scroll into view.
    pub fn lazy_mount() -> Self {
        Self {
            threshold: 0.0,
            root_margin: config::LAZY_MOUNT_ROOT_MARGIN,
        }
    }
}

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Browser observer for one element. Dropping it disposes the latch and
/// disconnects the observer, so callbacks never reach an unmounted owner.
pub struct RevealObserver {
    observer: IntersectionObserver,
    latch: Rc<RefCell<RevealLatch>>,
    _callback: IntersectionCallback,
}

impl RevealObserver {
    pub fn attach(element: &Element, options: RevealOptions, on_reveal: impl Fn() + 'static) -> Option<Self> {
        let latch = Rc::new(RefCell::new(RevealLatch::new()));

        let callback = {
            let latch = latch.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if latch.borrow_mut().observe(entry.is_intersecting()) {
                        observer.unobserve(&entry.target());
                        on_reveal();
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                debug!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
        observer.observe(element);

        Some(Self { observer, latch, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.latch.borrow_mut().dispose();
        self.observer.disconnect();
    }
}

/// One-shot "has entered the viewport" flag for the element bound to the
/// returned `NodeRef`. Stays false if the ref is never attached.
#[hook]
pub fn use_scroll_reveal() -> (NodeRef, bool) {
    use_scroll_reveal_with(RevealOptions::default())
}

#[hook]
pub fn use_scroll_reveal_with(options: RevealOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| RevealObserver::attach(&element, options, move || visible.set(true)));
                move || drop(observer)
            },
            (),
        );
    }

    (node, *visible)
}

/// Same contract as `use_scroll_reveal`, fanned out over `count` elements
/// tracked independently by position. A different `count` starts every
/// element over.
#[hook]
pub fn use_scroll_reveal_multiple(count: usize) -> (Rc<Vec<NodeRef>>, Vec<bool>) {
    use_scroll_reveal_group(count, ())
}

/// Variant of `use_scroll_reveal_multiple` whose elements are also
/// re-observed from scratch whenever `key` changes, for lists whose members
/// are swapped out while the length stays the same (filtered grids).
#[hook]
pub fn use_scroll_reveal_group<K>(count: usize, key: K) -> (Rc<Vec<NodeRef>>, Vec<bool>)
where
    K: PartialEq + 'static,
{
    let refs = use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(), count);
    let set = use_reducer_eq(|| RevealSet::with_len(count));

    {
        let refs = refs.clone();
        let dispatcher = set.dispatcher();
        use_effect_with_deps(
            move |(count, _)| {
                dispatcher.dispatch(RevealSetAction::Reset(*count));

                let observers: Vec<RevealObserver> = refs
                    .iter()
                    .enumerate()
                    .filter_map(|(index, node)| {
                        let element = node.cast::<Element>()?;
                        let dispatcher = dispatcher.clone();
                        RevealObserver::attach(&element, RevealOptions::default(), move || {
                            dispatcher.dispatch(RevealSetAction::Reveal(index));
                        })
                    })
                    .collect();
                debug!("observing {} of {} reveal targets", observers.len(), count);

                move || drop(observers)
            },
            (count, key),
        );
    }

    (refs, set.flags())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_flips_once_on_first_intersection() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());
        assert_eq!(latch.phase(), RevealPhase::Triggered);

        // Leaving and re-entering the viewport changes nothing
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn disposed_latch_keeps_its_outcome_and_ignores_reports() {
        let mut seen = RevealLatch::new();
        seen.observe(true);
        seen.dispose();
        assert_eq!(seen.phase(), RevealPhase::Disposed { revealed: true });
        assert!(seen.is_revealed());

        let mut unseen = RevealLatch::new();
        unseen.dispose();
        assert!(!unseen.observe(true));
        assert!(!unseen.is_revealed());
    }

    #[test]
    fn set_tracks_elements_independently() {
        let mut set = RevealSet::with_len(3);
        assert_eq!(set.flags(), vec![false, false, false]);

        assert!(set.reveal(1));
        assert!(!set.reveal(1));
        assert!(!set.reveal(7));
        assert_eq!(set.flags(), vec![false, true, false]);
    }

    #[test]
    fn reset_starts_every_element_over() {
        let set = Rc::new(RevealSet::with_len(2)).reduce(RevealSetAction::Reveal(0));
        assert_eq!(set.flags(), vec![true, false]);

        let resized = set.clone().reduce(RevealSetAction::Reset(4));
        assert_eq!(resized.flags(), vec![false; 4]);

        let emptied = resized.reduce(RevealSetAction::Reset(0));
        assert!(emptied.is_empty());

        // Mount-time reset equals the fresh state, so no re-render follows
        let fresh = Rc::new(RevealSet::with_len(3));
        assert_eq!(*fresh.clone().reduce(RevealSetAction::Reset(3)), *fresh);
    }

    #[test]
    fn repeated_reveal_returns_same_state() {
        let set = Rc::new(RevealSet::with_len(1)).reduce(RevealSetAction::Reveal(0));
        let again = set.clone().reduce(RevealSetAction::Reveal(0));
        assert!(Rc::ptr_eq(&set, &again));
    }

    #[test]
    fn default_options_match_reveal_contract() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }
}
