//! Sliding dialog used by every console form. The sheet is always mounted;
//! [`open_top_sheet`] and [`close_top_sheet`] toggle its `show` class.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use web_sys::HtmlElement;
use yew::prelude::*;

const SHOW_CLASS: &str = "show";

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    pub title: String,
    /// Fired by the close button; the owner decides whether to close.
    #[prop_or_default]
    pub on_close: Option<Callback<MouseEvent>>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-header">
                    <h3>{ props.title.clone() }</h3>
                    if let Some(on_close) = &props.on_close {
                        <button class="icon-btn" title="Close" onclick={on_close.clone()}>
                            <i class="material-icons">{"close"}</i>
                        </button>
                    }
                </div>
                <div class="top-sheet-body">
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_later(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_later(top_sheet_ref, false);
}

/// Toggles the class on the next tick so the CSS transition runs after any
/// pending render.
fn toggle_later(top_sheet_ref: NodeRef, show: bool) {
    Timeout::new(50, move || {
        if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
            let classes = top_sheet.class_list();
            let _ = if show {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
        }
    })
    .forget();
}
