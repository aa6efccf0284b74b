//! Small UI utilities shared by the console components.
//!
//! - **Feedback**: [`show_toast`] for transient notices and [`report`] for
//!   failed backend calls.
//! - **Formatting**: [`truncate`] for long descriptions and [`format_count`]
//!   for row totals.
//! - **Inputs**: readers for the value of the element behind an event.

use gloo_console::error;
use num_format::{Locale, ToFormattedString};
use outreach_common::api::ApiError;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Shortens `text` to `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max).collect();
    format!("{}...", kept)
}

/// Formats a row count with thousands separators, e.g. `12,345`.
pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}

/// Displays a temporary notification at the bottom of the screen. The toast
/// removes itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        let html_toast: HtmlElement = toast.unchecked_into();
        html_toast.set_class_name("toast");
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Logs a failed backend call and tells the user about it.
pub fn report(action: &str, err: &ApiError) {
    if !matches!(err, ApiError::Rejected { .. }) {
        error!(format!("{} failed: {}", action, err));
    }
    show_toast(&err.user_message());
}

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

pub fn checkbox_checked(e: &Event) -> bool {
    e.target_unchecked_into::<HtmlInputElement>().checked()
}
