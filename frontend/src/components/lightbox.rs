use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::gallery::{GalleryImage, LightboxAction, LightboxKey};

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: GalleryImage,
    /// Position of `image` in the filtered list, when it is still in it.
    pub index: Option<usize>,
    pub total: usize,
    pub on_action: Callback<LightboxAction>,
}

/// Window keydown listener for the lightbox, attached while `active` holds.
///
/// Owned by the page rather than the dialog: an open lightbox whose image was
/// filtered out renders nothing, yet the arrow keys still navigate.
#[hook]
pub fn use_lightbox_keys(active: bool, on_action: Callback<LightboxAction>) {
    use_effect_with_deps(
        move |active| {
            let listener = active.then(|| {
                let window = web_sys::window();
                let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if let Some(key) = LightboxKey::from_key(&e.key()) {
                        if key != LightboxKey::Escape {
                            e.prevent_default();
                        }
                        on_action.emit(LightboxAction::Key(key));
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(window) = window.as_ref() {
                    let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
                }
                (window, on_keydown)
            });

            move || {
                if let Some((Some(window), on_keydown)) = listener {
                    let _ = window.remove_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
                }
            }
        },
        active,
    );
}

/// Modal view of one gallery image.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let emit = |action: fn() -> LightboxAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(action());
        })
    };

    let image = &props.image;

    html! {
        <div class="lightbox-overlay" onclick={emit(|| LightboxAction::Close)}>
            <div class="lightbox" role="dialog" aria-modal="true" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="lightbox-close" aria-label="Close" onclick={emit(|| LightboxAction::Close)}>{"✕"}</button>

                <div class="lightbox-image">
                    <img src={image.image} alt={image.name} />
                </div>

                if props.total > 1 {
                    <button class="lightbox-nav prev" aria-label="Previous image" onclick={emit(|| LightboxAction::Previous)}>{"‹"}</button>
                    <button class="lightbox-nav next" aria-label="Next image" onclick={emit(|| LightboxAction::Next)}>{"›"}</button>
                }

                <div class="lightbox-info">
                    <h3>{ image.name }</h3>
                    <div class="meta">
                        <span>{ image.location }</span>
                        <span>{"•"}</span>
                        <span>{ image.year }</span>
                        <span>{"•"}</span>
                        <span>{ image.category.label() }</span>
                    </div>
                    if let (Some(index), true) = (props.index, props.total > 1) {
                        <div class="lightbox-counter">{ format!("{} of {}", index + 1, props.total) }</div>
                    }
                </div>
            </div>
        </div>
    }
}
