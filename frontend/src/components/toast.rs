use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: AttrValue,
    pub description: AttrValue,
}

pub enum ToastAction {
    Push { title: AttrValue, description: AttrValue },
    Dismiss(u32),
}

/// Visible toasts, newest last. Oldest ones fall off past the limit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { title, description } => {
                next.toasts.push(Toast { id: next.next_id, title, description });
                next.next_id += 1;
                let overflow = next.toasts.len().saturating_sub(config::TOAST_LIMIT);
                next.toasts.drain(..overflow);
            }
            ToastAction::Dismiss(id) => {
                next.toasts.retain(|toast| toast.id != id);
                if next.toasts.len() == self.toasts.len() {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerHandle<ToastQueue>;

#[derive(Clone)]
pub struct ToastHandle {
    queue: Option<ToastContext>,
}

impl ToastHandle {
    pub fn show(&self, title: impl Into<AttrValue>, description: impl Into<AttrValue>) {
        if let Some(queue) = &self.queue {
            queue.dispatch(ToastAction::Push {
                title: title.into(),
                description: description.into(),
            });
        }
    }
}

/// Toasts from anywhere below a `ToastProvider`; a no-op outside one.
#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle { queue: use_context::<ToastContext>() }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let on_dismiss = {
        let queue = queue.clone();
        Callback::from(move |id: u32| queue.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={queue.clone()}>
            { for props.children.iter() }
            <ol class="toast-viewport">
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </ol>
            <style>
                {r#"
                    .toast-viewport {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        max-width: 380px;
                    }
                    .toast {
                        background: #fff;
                        color: #0a0a0a;
                        border: 1px solid #e5e5e5;
                        padding: 1rem 1.25rem;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                        animation: toastIn 0.3s ease-out;
                        cursor: pointer;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.9rem;
                        color: #525252;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <li class="toast" role="status" {onclick}>
            <div class="toast-title">{ props.toast.title.clone() }</div>
            <div class="toast-description">{ props.toast.description.clone() }</div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, title: &'static str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push { title: title.into(), description: "".into() })
    }

    #[test]
    fn pushes_get_fresh_ids_and_overflow_drops_oldest() {
        let mut queue = Rc::new(ToastQueue::default());
        for title in ["a", "b", "c", "d"] {
            queue = push(queue, title);
        }
        assert_eq!(queue.toasts.len(), config::TOAST_LIMIT);
        let titles: Vec<_> = queue.toasts.iter().map(|t| t.title.to_string()).collect();
        assert_eq!(titles, vec!["b", "c", "d"]);
        let ids: Vec<_> = queue.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let queue = push(push(Rc::new(ToastQueue::default()), "a"), "b");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(&*queue.toasts[0].title, "b");

        let unchanged = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &unchanged));
    }
}
