//! One pad per gesture kind, each driven by `use_gesture_effect`.
//!
//! The options box is live JSON: edits re-dispatch the pad's gesture with
//! the new options. A pad's kind never changes after it mounts.

use gestures::GestureKind;
use hooks::{GestureTarget, use_gesture_effect};
use leptos::prelude::*;

use crate::util::format::{default_options, describe, parse_options, push_log};

/// Grid of gesture pads, one per kind.
#[component]
pub fn Playground() -> impl IntoView {
    view! {
        <div class="playground">
            {GestureKind::ALL.into_iter().map(|kind| view! { <GesturePad kind=kind /> }).collect_view()}
        </div>
    }
}

/// A surface that recognizes `kind` and logs each activation.
#[component]
pub fn GesturePad(kind: GestureKind) -> impl IntoView {
    let surface = NodeRef::<leptos::html::Div>::new();
    let text = RwSignal::new(default_options(kind).to_owned());
    let parsed = Memo::new(move |_| parse_options(&text.get()).map_err(|err| err.to_string()));
    let options = Signal::derive(move || parsed.get().unwrap_or_default());
    let entries = RwSignal::new(Vec::<String>::new());

    use_gesture_effect(
        GestureTarget::node(surface),
        Signal::stored(kind),
        move |_, data| entries.update(|log| push_log(log, describe(&data))),
        options,
    );

    view! {
        <section class="pad">
            <h3>{kind.as_str()}</h3>
            <div class="pad__surface" node_ref=surface>
                {format!("try a {kind}")}
            </div>
            <textarea
                class="pad__options"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            {move || parsed.get().err().map(|message| view! { <div class="pad__error">{message}</div> })}
            <ol class="pad__log">
                {move || entries.get().into_iter().map(|entry| view! { <li>{entry}</li> }).collect_view()}
            </ol>
        </section>
    }
}
