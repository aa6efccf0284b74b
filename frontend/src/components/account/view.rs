use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::input_value;

use super::messages::{Msg, PasswordField, ProfileField};
use super::state::AccountComponent;

const PROFILE_FIELDS: [(ProfileField, &str, &str); 6] = [
    (ProfileField::FirstName, "First name", "text"),
    (ProfileField::MiddleName, "Middle name", "text"),
    (ProfileField::LastName, "Last name", "text"),
    (ProfileField::Email, "Email", "email"),
    (ProfileField::Phone, "Phone", "tel"),
    (ProfileField::Address, "Address", "text"),
];

const PASSWORD_FIELDS: [(PasswordField, &str); 3] = [
    (PasswordField::Current, "Current password"),
    (PasswordField::New, "New password"),
    (PasswordField::Confirm, "Confirm password"),
];

pub fn view(component: &AccountComponent, ctx: &Context<AccountComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="account-page">
            { profile_form(component, link) }
            { password_form(component, link) }
        </div>
    }
}

fn profile_form(component: &AccountComponent, link: &Scope<AccountComponent>) -> Html {
    html! {
        <section class="panel" id="profile">
            <h2>{"Your Profile"}</h2>
            <div class="form">
                <label>{"Username"}
                    <input type="text" value={component.profile.username.clone()} readonly={true} />
                </label>
                { for PROFILE_FIELDS.into_iter().map(|(field, label, kind)| html! {
                    <label>{ label }
                        <input type={kind} value={component.profile_field(field).to_string()}
                            oninput={link.callback(move |e: InputEvent| Msg::SetProfile(field, input_value(&e)))} />
                    </label>
                }) }
                <div class="form-actions">
                    <button class="btn primary" disabled={component.saving_profile}
                        onclick={link.callback(|_| Msg::SaveProfile)}>
                        { if component.saving_profile { "Saving..." } else { "Update Profile" } }
                    </button>
                </div>
            </div>
        </section>
    }
}

fn password_form(component: &AccountComponent, link: &Scope<AccountComponent>) -> Html {
    html! {
        <section class="panel" id="passwords">
            <h2>{"Change Password"}</h2>
            <div class="form">
                { for PASSWORD_FIELDS.into_iter().map(|(field, label)| html! {
                    <label>{ label }
                        <input type="password" value={component.password_field(field).to_string()}
                            oninput={link.callback(move |e: InputEvent| Msg::SetPassword(field, input_value(&e)))} />
                    </label>
                }) }
                <div class="form-actions">
                    <button class="btn primary" disabled={component.saving_password}
                        onclick={link.callback(|_| Msg::SavePassword)}>
                        { if component.saving_password { "Saving..." } else { "Update Password" } }
                    </button>
                </div>
            </div>
        </section>
    }
}
