use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, FutureExt, LocalBoxFuture, Shared};
use log::{debug, info};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use js_sys::{Function, Reflect};
use web_sys::{Document, HtmlScriptElement};

use crate::config;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScriptLoadError {
    #[error("no browser document available")]
    Unavailable,
    #[error("failed to load script {0}")]
    ScriptFailed(String),
    #[error("script loaded but global `{0}` is missing")]
    MissingGlobal(&'static str),
    #[error("initializer of `{0}` threw")]
    InitFailed(&'static str),
}

pub type LoadOutcome = Result<(), ScriptLoadError>;
pub type SharedLoad = Shared<LocalBoxFuture<'static, LoadOutcome>>;

/// Where the script actually comes from. The browser implementation injects
/// a `<script>` tag; tests substitute a counting fake.
pub trait ScriptSource {
    fn fetch(&self) -> LocalBoxFuture<'static, LoadOutcome>;
}

enum LoadState {
    Idle,
    Loading(SharedLoad),
    Loaded,
}

/// Loads a third-party script at most once.
///
/// Callers arriving while a load is in flight get a clone of the same shared
/// future; callers after success get an already-resolved one. A failed load
/// clears the memo so the next caller starts a fresh attempt.
#[derive(Clone)]
pub struct ScriptLoader {
    source: Rc<dyn ScriptSource>,
    state: Rc<RefCell<LoadState>>,
}

impl ScriptLoader {
    pub fn new(source: impl ScriptSource + 'static) -> Self {
        Self {
            source: Rc::new(source),
            state: Rc::new(RefCell::new(LoadState::Idle)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.borrow(), LoadState::Loaded)
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.state.borrow(), LoadState::Loading(_))
    }

    pub fn load(&self) -> SharedLoad {
        let mut state = self.state.borrow_mut();
        match &*state {
            LoadState::Loaded => return future::ready(Ok(())).boxed_local().shared(),
            LoadState::Loading(pending) => return pending.clone(),
            LoadState::Idle => {}
        }

        let fetch = self.source.fetch();
        let memo = Rc::downgrade(&self.state);
        let pending = async move {
            let outcome = fetch.await;
            if let Some(memo) = memo.upgrade() {
                *memo.borrow_mut() = match outcome {
                    Ok(()) => LoadState::Loaded,
                    Err(_) => LoadState::Idle,
                };
            }
            outcome
        }
        .boxed_local()
        .shared();

        *state = LoadState::Loading(pending.clone());
        pending
    }
}

thread_local! {
    static GLOBAL_LOADER: RefCell<Option<ScriptLoader>> = RefCell::new(None);
}

/// Install the process-wide loader. Replaces any previous one.
pub fn init(loader: ScriptLoader) {
    GLOBAL_LOADER.with(|slot| *slot.borrow_mut() = Some(loader));
}

/// The process-wide loader, created on first use with the browser source.
pub fn global() -> ScriptLoader {
    GLOBAL_LOADER.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| ScriptLoader::new(DomScriptSource::unicorn_studio()))
            .clone()
    })
}

/// Forget the process-wide loader; the next `global()` starts from scratch.
pub fn reset() {
    GLOBAL_LOADER.with(|slot| *slot.borrow_mut() = None);
}

/// Injects a `<script>` tag (or reuses one already on the page) and runs the
/// runtime's global initializer once it has loaded.
pub struct DomScriptSource {
    src: &'static str,
    marker: &'static str,
    global: &'static str,
}

impl DomScriptSource {
    pub fn unicorn_studio() -> Self {
        Self {
            src: config::UNICORN_STUDIO_SRC,
            marker: config::UNICORN_STUDIO_MARKER,
            global: config::UNICORN_STUDIO_GLOBAL,
        }
    }
}

/// Marks a tag whose load or error event has already fired.
const LOAD_STATE_ATTR: &str = "data-load-state";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TagState {
    /// Still downloading; its load or error event is yet to come.
    Pending,
    /// Finished one way or the other; no further events will fire.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FetchPlan {
    /// The runtime is already on the page.
    Initialize,
    AwaitTag,
    /// A settled tag without a runtime is dead; swap in a fresh one.
    ReplaceTag,
    InjectTag,
}

fn plan_fetch(tag: Option<TagState>, global_present: bool) -> FetchPlan {
    match (global_present, tag) {
        (true, _) => FetchPlan::Initialize,
        (false, Some(TagState::Pending)) => FetchPlan::AwaitTag,
        (false, Some(TagState::Settled)) => FetchPlan::ReplaceTag,
        (false, None) => FetchPlan::InjectTag,
    }
}

fn tag_state(script: &web_sys::Element) -> TagState {
    if script.has_attribute(LOAD_STATE_ATTR) {
        TagState::Settled
    } else {
        TagState::Pending
    }
}

impl ScriptSource for DomScriptSource {
    fn fetch(&self) -> LocalBoxFuture<'static, LoadOutcome> {
        let (src, marker, global) = (self.src, self.marker, self.global);
        async move {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(ScriptLoadError::Unavailable)?;

            let existing = document
                .query_selector(&format!("script[src*=\"{}\"]", marker))
                .ok()
                .flatten();

            let plan = plan_fetch(existing.as_ref().map(tag_state), global_object(global).is_some());
            match (plan, existing) {
                (FetchPlan::Initialize, _) => {}
                (FetchPlan::AwaitTag, Some(script)) => {
                    debug!("waiting on existing {} script tag", global);
                    wait_for_load(&script, src).await?;
                }
                (_, stale) => {
                    if let Some(stale) = stale {
                        debug!("replacing dead {} script tag", global);
                        stale.remove();
                    }
                    let script = inject_script(&document, src)?;
                    info!("loading {}", src);
                    wait_for_load(&script, src).await?;
                }
            }

            initialize_global(global)
        }
        .boxed_local()
    }
}

fn inject_script(document: &Document, src: &str) -> Result<web_sys::Element, ScriptLoadError> {
    let script: HtmlScriptElement = document
        .create_element("script")
        .ok()
        .and_then(|el| el.dyn_into().ok())
        .ok_or(ScriptLoadError::Unavailable)?;
    script.set_src(src);
    script.set_async(true);
    script.set_defer(true);

    let head = document.head().ok_or(ScriptLoadError::Unavailable)?;
    head.append_child(&script)
        .map_err(|_| ScriptLoadError::ScriptFailed(src.to_string()))?;
    Ok(script.into())
}

/// Resolves on the tag's load or error event. A tag that errored is removed
/// so the next attempt injects a fresh one.
async fn wait_for_load(script: &web_sys::Element, src: &str) -> LoadOutcome {
    let (tx, rx) = oneshot::channel::<LoadOutcome>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = tx.clone();
        let script = script.clone();
        Closure::wrap(Box::new(move || {
            let _ = script.set_attribute(LOAD_STATE_ATTR, "loaded");
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        }) as Box<dyn FnMut()>)
    };
    let on_error = {
        let src = src.to_string();
        let script = script.clone();
        Closure::wrap(Box::new(move || {
            let _ = script.set_attribute(LOAD_STATE_ATTR, "failed");
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(ScriptLoadError::ScriptFailed(src.clone())));
            }
        }) as Box<dyn FnMut()>)
    };

    let _ = script.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    let _ = script.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());

    let outcome = rx
        .await
        .unwrap_or_else(|_| Err(ScriptLoadError::ScriptFailed(src.to_string())));

    let _ = script.remove_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    let _ = script.remove_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    if outcome.is_err() {
        script.remove();
    }
    outcome
}

fn global_object(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn initialize_global(name: &'static str) -> LoadOutcome {
    let runtime = global_object(name).ok_or(ScriptLoadError::MissingGlobal(name))?;
    let flag = JsValue::from_str("isInitialized");

    let initialized = Reflect::get(&runtime, &flag)
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false);
    if initialized {
        return Ok(());
    }

    let init: Function = Reflect::get(&runtime, &JsValue::from_str("init"))
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or(ScriptLoadError::MissingGlobal(name))?;
    init.call0(&runtime).map_err(|_| ScriptLoadError::InitFailed(name))?;
    let _ = Reflect::set(&runtime, &flag, &JsValue::TRUE);

    debug!("{} initialized", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::Cell;

    /// Counts fetches; each fetch waits on a oneshot the test resolves.
    #[derive(Clone, Default)]
    struct FakeSource {
        fetches: Rc<Cell<usize>>,
        pending: Rc<RefCell<Vec<oneshot::Sender<LoadOutcome>>>>,
    }

    impl FakeSource {
        fn resolve_all(&self, outcome: LoadOutcome) {
            for tx in self.pending.borrow_mut().drain(..) {
                let _ = tx.send(outcome.clone());
            }
        }
    }

    impl ScriptSource for FakeSource {
        fn fetch(&self) -> LocalBoxFuture<'static, LoadOutcome> {
            self.fetches.set(self.fetches.get() + 1);
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push(tx);
            async move { rx.await.unwrap_or(Err(ScriptLoadError::Unavailable)) }.boxed_local()
        }
    }

    fn run_concurrently(loader: &ScriptLoader, source: &FakeSource, callers: usize, outcome: LoadOutcome) -> Vec<LoadOutcome> {
        let mut pool = LocalPool::new();
        let results = Rc::new(RefCell::new(Vec::new()));
        for _ in 0..callers {
            let load = loader.load();
            let results = results.clone();
            pool.spawner()
                .spawn_local(async move {
                    let outcome = load.await;
                    results.borrow_mut().push(outcome);
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert!(results.borrow().is_empty());

        source.resolve_all(outcome);
        pool.run();
        let collected = results.borrow().clone();
        collected
    }

    #[test]
    fn concurrent_callers_share_one_fetch() {
        let source = FakeSource::default();
        let loader = ScriptLoader::new(source.clone());

        let outcomes = run_concurrently(&loader, &source, 5, Ok(()));
        assert_eq!(source.fetches.get(), 1);
        assert_eq!(outcomes, vec![Ok(()); 5]);
        assert!(loader.is_loaded());
    }

    #[test]
    fn callers_after_success_resolve_immediately() {
        let source = FakeSource::default();
        let loader = ScriptLoader::new(source.clone());
        run_concurrently(&loader, &source, 1, Ok(()));

        assert_eq!(block_on(loader.load()), Ok(()));
        assert_eq!(block_on(loader.load()), Ok(()));
        assert_eq!(source.fetches.get(), 1);
    }

    #[test]
    fn failure_is_shared_then_retried() {
        let source = FakeSource::default();
        let loader = ScriptLoader::new(source.clone());

        let failed = Err(ScriptLoadError::ScriptFailed("cdn".into()));
        let outcomes = run_concurrently(&loader, &source, 3, failed.clone());
        assert_eq!(outcomes, vec![failed; 3]);
        assert_eq!(source.fetches.get(), 1);
        assert!(!loader.is_loaded());
        assert!(!loader.is_loading());

        let outcomes = run_concurrently(&loader, &source, 2, Ok(()));
        assert_eq!(outcomes, vec![Ok(()); 2]);
        assert_eq!(source.fetches.get(), 2);
    }

    #[test]
    fn dead_tags_are_replaced_not_awaited() {
        assert_eq!(plan_fetch(None, false), FetchPlan::InjectTag);
        assert_eq!(plan_fetch(Some(TagState::Pending), false), FetchPlan::AwaitTag);
        assert_eq!(plan_fetch(Some(TagState::Settled), false), FetchPlan::ReplaceTag);
    }

    #[test]
    fn present_runtime_skips_the_tag_entirely() {
        assert_eq!(plan_fetch(None, true), FetchPlan::Initialize);
        assert_eq!(plan_fetch(Some(TagState::Pending), true), FetchPlan::Initialize);
        assert_eq!(plan_fetch(Some(TagState::Settled), true), FetchPlan::Initialize);
    }

    #[test]
    fn clones_share_the_memo() {
        let source = FakeSource::default();
        let loader = ScriptLoader::new(source.clone());
        let other = loader.clone();

        let _first = loader.load();
        let _second = other.load();
        assert_eq!(source.fetches.get(), 1);
        assert!(other.is_loading());
    }

    #[test]
    fn global_slot_can_be_replaced_and_reset() {
        let source = FakeSource::default();
        init(ScriptLoader::new(source.clone()));

        let _pending = global().load();
        let _again = global().load();
        assert_eq!(source.fetches.get(), 1);

        reset();
        let fresh = FakeSource::default();
        init(ScriptLoader::new(fresh.clone()));
        let _pending = global().load();
        assert_eq!(fresh.fetches.get(), 1);
        reset();
    }
}
