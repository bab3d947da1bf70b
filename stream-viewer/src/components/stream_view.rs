use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use gloo_timers::future::TimeoutFuture;
use stream_core::{run_poll_loop, PollHandle, StreamEntry, StreamSnapshot};

use crate::api::HttpStreamSource;
use crate::components::message_card::MessageCard;
use crate::config::viewer_config;
use crate::page::ViewerContext;

fn sleep_for(interval: Duration) -> TimeoutFuture {
    TimeoutFuture::new(interval.as_millis().min(u32::MAX as u128) as u32)
}

/// One stream as a horizontal row of cards, kept fresh by its own poll loop.
#[component]
pub fn StreamView(stream_name: String) -> Element {
    let ctx = use_context::<ViewerContext>();
    let mut snapshot = use_signal(|| None::<StreamSnapshot>);
    let mut poll_started = use_signal(|| false);
    let poll = use_hook(PollHandle::new);

    {
        let poll = poll.clone();
        let ctx = ctx.clone();
        let stream_name = stream_name.clone();
        use_drop(move || {
            poll.cancel();
            ctx.forget_stream(&stream_name);
            debug!("stream view unmounted (stream={})", stream_name);
        });
    }

    {
        let ctx = ctx.clone();
        let stream_name = stream_name.clone();
        use_effect(move || {
            if *poll_started.peek() {
                return;
            }
            poll_started.set(true);

            let poll = poll.clone();
            let ctx = ctx.clone();
            let stream_name = stream_name.clone();
            spawn(async move {
                let config = viewer_config();
                let source = HttpStreamSource::new(config.api_base.clone());
                run_poll_loop(
                    &source,
                    &stream_name,
                    config.poll_interval,
                    poll,
                    sleep_for,
                    |next| {
                        ctx.record_causation_streams(&stream_name, next.causation_stream_names());
                        snapshot.set(Some(next));
                    },
                )
                .await;
            });
        });
    }

    // New cards shift everything after them; connectors re-route once the
    // fresh snapshot is on screen.
    {
        let ctx = ctx.clone();
        use_effect(move || {
            let _ = snapshot.read();
            ctx.invalidate();
        });
    }

    let row = match snapshot.read().as_ref() {
        None => rsx! {
            div { class: "stream-row-placeholder", "Loading…" }
        },
        Some(current) if current.is_empty() => rsx! {
            div { class: "stream-row-placeholder", "No messages" }
        },
        Some(current) => rsx! {
            for entry in current.entries().iter() {
                StreamEntryCard { key: "{entry.key()}", entry: entry.clone() }
            }
        },
    };

    rsx! {
        section {
            class: "stream-view",
            div { class: "stream-view-label", "{stream_name}" }
            div { class: "stream-row", {row} }
        }
    }
}

#[component]
fn StreamEntryCard(entry: StreamEntry) -> Element {
    match entry {
        StreamEntry::Message(message) => rsx! {
            MessageCard { message }
        },
        StreamEntry::Malformed { index, reason } => rsx! {
            div {
                class: "message-card message-card--malformed",
                title: "{reason}",
                div { class: "message-card-type", "Unreadable message" }
                div { class: "message-card-meta", "#{index}" }
            }
        },
    }
}
