use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::{BENEFITS, MEMBERSHIP_TIERS};
use crate::forms::{MembershipApplication, MembershipCategory, MembershipField};
use crate::hooks::page_top::use_scroll_to_top;
use crate::hooks::scroll_reveal::{use_scroll_reveal, use_scroll_reveal_multiple};
use crate::motion;

#[function_component(Membership)]
pub fn membership() -> Html {
    use_scroll_to_top();
    let form = use_state(MembershipApplication::default);
    let (tiers_ref, tiers_visible) = use_scroll_reveal();
    let (benefit_refs, benefit_visible) = use_scroll_reveal_multiple(BENEFITS.len());
    let (form_ref, form_visible) = use_scroll_reveal();

    let on_input = |field: MembershipField| {
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
            form.set(form.with(MembershipField::Message, input.value()));
        })
    };

    let on_category = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(form.with_category(&select.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Membership application submitted: {}", form.to_json());
        })
    };

    let text_field = |id: &'static str, label: &'static str, kind: &'static str, value: &str, field: MembershipField| {
        html! {
            <div class="form-field">
                <label for={id}>{ label }</label>
                <input id={id} name={id} type={kind} required=true value={value.to_string()} oninput={on_input(field)} />
            </div>
        }
    };

    let selected_category = form.category.map(|category| category.value()).unwrap_or("");

    html! {
        <div class="membership-page">
            <section class="page-hero section-dark minimal-hero">
                <div class="container">
                    <p class="kicker">{"Membership"}</p>
                    <h1>{"Join a Network of Future Engineers"}</h1>
                    <p class="hero-subtle">{"Professional recognition, technical resources, and a community that grows with you."}</p>
                </div>
            </section>

            <section class="section">
                <div ref={tiers_ref} class={classes!("container", "grid-3", "reveal-up", tiers_visible.then(|| "visible"))}>
                    { for MEMBERSHIP_TIERS.iter().enumerate().map(|(index, tier)| html! {
                        <div class="card-mono" style={motion::stagger_delay(index, 100)}>
                            <div class="card-icon">{ tier.icon }</div>
                            <h3>{ tier.title }</h3>
                            <p class="muted">{ tier.description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section section-secondary">
                <div class="container">
                    <h2 class="section-title">{"Membership Benefits"}</h2>
                    <div class="grid-3">
                        { for BENEFITS.iter().enumerate().map(|(index, (title, icon))| html! {
                            <div
                                ref={benefit_refs[index].clone()}
                                class={classes!("benefit", "reveal-up", motion::flag(&benefit_visible, index).then(|| "visible"))}
                                style={motion::stagger_delay(index, 100)}
                            >
                                <span class="benefit-icon">{ *icon }</span>
                                <h3>{ *title }</h3>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div ref={form_ref} class={classes!("container", "narrow", "reveal-up", form_visible.then(|| "visible"))}>
                    <h2 class="section-title">{"Apply for Membership"}</h2>
                    <div class="title-rule"></div>
                    <form class="stacked-form" {onsubmit}>
                        { text_field("fullName", "Full Name", "text", &form.full_name, MembershipField::FullName) }
                        { text_field("department", "Department", "text", &form.department, MembershipField::Department) }
                        { text_field("email", "Email", "email", &form.email, MembershipField::Email) }
                        { text_field("phone", "Phone", "tel", &form.phone, MembershipField::Phone) }

                        <div class="form-field">
                            <label for="category">{"Membership Category"}</label>
                            <select id="category" name="category" required=true onchange={on_category}>
                                <option value="" selected={selected_category.is_empty()} disabled=true>{"Select a category"}</option>
                                { for MembershipCategory::ALL.into_iter().map(|category| html! {
                                    <option value={category.value()} selected={selected_category == category.value()}>
                                        { category.label() }
                                    </option>
                                }) }
                            </select>
                        </div>

                        <div class="form-field">
                            <label for="message">{"Why do you want to join?"}</label>
                            <textarea id="message" name="message" rows="4" value={form.message.clone()} oninput={on_message} />
                        </div>

                        <button type="submit" class="primary-button">{"Submit Application"}</button>
                    </form>
                </div>
            </section>
        </div>
    }
}
