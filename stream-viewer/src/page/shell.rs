use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use stream_core::{causation_candidates, join_stream_names};

use crate::components::connector::ArrowheadDefs;
use crate::components::stream_panel::StreamNamePanel;
use crate::components::stream_view::StreamView;
use crate::components::styles::STREAM_VIEWER_STYLES;
use crate::config::viewer_config;
use crate::interop::push_query_param;
use crate::page::{ViewerContext, PAGE_ROOT_ID};
use crate::page::effects::{
    install_layout_listeners, install_navigation_listener, log_stream_changes, read_stream_names,
};

#[component]
pub fn PageShell() -> Element {
    let config = viewer_config();
    let mut stream_names = use_signal(|| read_stream_names(config.stream_names_param));
    let layout_tick = use_signal(|| 0_u64);
    let causation_streams = use_signal(BTreeMap::<String, BTreeSet<String>>::new);
    let ctx = use_context_provider(|| ViewerContext::new(layout_tick, causation_streams));

    // Dropped with the page, which removes the listeners.
    let _listeners = use_hook(|| {
        let mut listeners = install_layout_listeners(&ctx);
        listeners.extend(install_navigation_listener(
            config.stream_names_param,
            stream_names,
        ));
        Rc::new(listeners)
    });

    let apply_stream_names = move |next: Vec<String>| {
        log_stream_changes(&stream_names.peek(), &next);
        if push_query_param(config.stream_names_param, &join_stream_names(&next)).is_none() {
            warn!("Failed to push stream names to the address bar");
        }
        stream_names.set(next);
    };

    let names = stream_names();
    let candidates = causation_candidates(
        &names,
        causation_streams.read().values().flatten().cloned(),
    );

    rsx! {
        style { {STREAM_VIEWER_STYLES} }
        div {
            class: "stream-viewer",
            aside {
                class: "stream-viewer-panel",
                StreamNamePanel {
                    stream_names: names.clone(),
                    causation_streams: candidates,
                    on_change: apply_stream_names,
                }
            }
            main {
                id: PAGE_ROOT_ID,
                class: "stream-page",
                ArrowheadDefs {}
                if names.is_empty() {
                    div {
                        class: "stream-page-empty",
                        "No streams selected. Add a stream name to start watching it."
                    }
                }
                for name in names.iter() {
                    StreamView { key: "{name}", stream_name: name.clone() }
                }
            }
        }
    }
}
