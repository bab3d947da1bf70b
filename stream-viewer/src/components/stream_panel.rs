use dioxus::prelude::*;
use stream_core::{add_stream_names, remove_stream_name};

/// Side panel that edits which streams are on the page.
///
/// Every action hands the complete next list to `on_change`; the page owns
/// the address bar and decides what mounts.
#[component]
pub fn StreamNamePanel(
    stream_names: Vec<String>,
    causation_streams: Vec<String>,
    on_change: EventHandler<Vec<String>>,
) -> Element {
    let mut draft = use_signal(String::new);

    let add_from_draft = {
        let stream_names = stream_names.clone();
        use_callback(move |_| {
            let input = draft.to_string();
            if input.trim().is_empty() {
                return;
            }
            on_change.call(add_stream_names(&stream_names, &input));
            draft.set(String::new());
        })
    };

    let causation_items: Vec<(String, Vec<String>)> = causation_streams
        .iter()
        .map(|name| (name.clone(), add_stream_names(&stream_names, name)))
        .collect();
    let active_items: Vec<(String, Vec<String>)> = stream_names
        .iter()
        .map(|name| (name.clone(), remove_stream_name(&stream_names, name)))
        .collect();

    rsx! {
        div {
            class: "stream-panel",
            section {
                class: "stream-panel-section",
                h2 { "Causation Streams" }
                if causation_items.is_empty() {
                    p { class: "stream-panel-empty", "None referenced" }
                }
                for (name, next) in causation_items {
                    button {
                        key: "{name}",
                        class: "stream-panel-item stream-panel-item--add",
                        title: "Show {name}",
                        onclick: move |_| on_change.call(next.clone()),
                        "+ {name}"
                    }
                }
            }

            section {
                class: "stream-panel-section",
                h2 { "Active Streams" }
                if active_items.is_empty() {
                    p { class: "stream-panel-empty", "None" }
                }
                for (name, next) in active_items {
                    div {
                        key: "{name}",
                        class: "stream-panel-item",
                        span { class: "stream-panel-name", "{name}" }
                        button {
                            class: "stream-panel-remove",
                            title: "Remove {name}",
                            onclick: move |_| on_change.call(next.clone()),
                            "×"
                        }
                    }
                }
            }

            section {
                class: "stream-panel-section",
                h2 { "Add Stream" }
                div {
                    class: "stream-panel-add",
                    input {
                        value: "{draft}",
                        placeholder: "streamName or a,b,c",
                        oninput: move |e| draft.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                add_from_draft.call(());
                            }
                        }
                    }
                    button {
                        onclick: move |_| add_from_draft.call(()),
                        "Add"
                    }
                }
            }
        }
    }
}
