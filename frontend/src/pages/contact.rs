use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::config;
use crate::content::CONTACT_INFO;
use crate::forms::{ContactField, ContactForm};
use crate::hooks::mounted::use_mount_flag;
use crate::hooks::page_top::use_scroll_to_top;
use crate::hooks::scroll_reveal::use_scroll_reveal;

#[derive(Clone, Copy, PartialEq)]
struct Ripple {
    left: f64,
    top: f64,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    let toast = use_toast();
    let mounted = use_mount_flag();
    let form = use_state(ContactForm::default);
    let submitting = use_state(|| false);
    let ripple = use_state(|| None::<Ripple>);
    let ripple_timeout = use_mut_ref(|| None::<Timeout>);
    let button_ref = use_node_ref();
    let (form_ref, form_visible) = use_scroll_reveal();
    let (info_ref, info_visible) = use_scroll_reveal();

    let on_field = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(form.with(ContactField::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submitting.set(true);

            let form = form.clone();
            let submitting = submitting.clone();
            let toast = toast.clone();
            let mounted = mounted.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::CONTACT_SUBMIT_DELAY_MS).await;
                // page left while sending; its state handles are gone
                let delivered = mounted.run_if_mounted(|| {
                    info!("Contact message from {} <{}>", form.name, form.email);
                    toast.show("Message Sent", "Thank you for reaching out. We will get back to you soon.");
                    form.set(ContactForm::default());
                    submitting.set(false);
                });
                if !delivered {
                    debug!("Contact page unmounted before submission finished");
                }
            });
        })
    };

    let on_ripple = {
        let ripple = ripple.clone();
        let button_ref = button_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(button) = button_ref.cast::<Element>() else {
                return;
            };
            let rect = button.get_bounding_client_rect();
            ripple.set(Some(Ripple {
                left: e.client_x() as f64 - rect.left(),
                top: e.client_y() as f64 - rect.top(),
            }));

            let ripple = ripple.clone();
            // dropping the previous timeout cancels it
            *ripple_timeout.borrow_mut() = Some(Timeout::new(config::RIPPLE_MS, move || ripple.set(None)));
        })
    };

    html! {
        <div class="contact-page">
            <section class="page-hero section-dark letters-bg">
                <div class="container">
                    <h1>{"Let's Talk Engineering"}</h1>
                    <p class="hero-subtle">{"Questions, collaborations, or ideas. We read every message."}</p>
                </div>
            </section>

            <section class="section">
                <div class="container grid-2 wide-gap">
                    <div ref={form_ref} class={classes!("reveal-left", form_visible.then(|| "visible"))}>
                        <h2>{"Get in Touch"}</h2>
                        <form class="stacked-form" {onsubmit}>
                            <div class="form-field">
                                <label for="name">{"Name"}</label>
                                <input id="name" type="text" required=true placeholder="Your name"
                                    value={form.name.clone()} oninput={on_field(ContactField::Name)} />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email"}</label>
                                <input id="email" type="email" required=true placeholder="your@email.com"
                                    value={form.email.clone()} oninput={on_field(ContactField::Email)} />
                            </div>
                            <div class="form-field">
                                <label for="message">{"Message"}</label>
                                <textarea id="message" rows="5" required=true placeholder="Your message..."
                                    value={form.message.clone()} oninput={on_message} />
                            </div>
                            <button
                                ref={button_ref}
                                type="submit"
                                class="primary-button ripple-host"
                                disabled={*submitting}
                                onclick={on_ripple}
                            >
                                if let Some(Ripple { left, top }) = *ripple {
                                    <span class="animate-ripple" style={format!("left: {}px; top: {}px;", left, top)}></span>
                                }
                                {"➤ "}
                                { if *submitting { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    </div>

                    <div ref={info_ref} class={classes!("reveal-right", info_visible.then(|| "visible"))}>
                        <h2>{"Contact Information"}</h2>
                        <div class="contact-list">
                            { for CONTACT_INFO.iter().map(|(icon, label, value)| html! {
                                <div class="contact-item">
                                    <div class="icon-box">{ *icon }</div>
                                    <div>
                                        <p class="muted small">{ *label }</p>
                                        <p class="strong">{ *value }</p>
                                    </div>
                                </div>
                            }) }
                        </div>

                        <div class="card-mono">
                            <h3>{"Faculty Coordinator"}</h3>
                            <p>{"Dr. Sarah Wilson"}</p>
                            <p class="muted small">{"Department of Engineering"}</p>
                            <p class="muted small">{"s.wilson@university.edu"}</p>
                        </div>

                        <div class="map-block">
                            <h3>{"Location"}</h3>
                            <div class="map-frame">
                                <iframe
                                    src={config::MAP_EMBED_URL}
                                    width="100%"
                                    height="100%"
                                    style="border: 0; filter: grayscale(100%);"
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                    title="Location Map"
                                ></iframe>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
