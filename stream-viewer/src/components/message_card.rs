use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use stream_core::{
    detail_rows, display_time, place_popup, Align, ConnectorRequest, DetailRow, Message,
    PreferredPlacement, ResolvedPopup, DETAIL_POPUP_OFFSET,
};

use crate::components::connector::CausationConnector;
use crate::interop::{element_rect, viewport_size, DomAnchor};
use crate::page::ViewerContext;

/// Summary card for one message, its hover detail popup, and the arrow to
/// the message that caused it.
#[component]
pub fn MessageCard(message: Message) -> Element {
    let ctx = use_context::<ViewerContext>();
    let global_position = message.global_position;
    let anchor_id = message.anchor_id();
    let detail_id = message.detail_dom_id();
    let mut show_detail = use_signal(|| false);
    let mut popup = use_signal(|| None::<ResolvedPopup>);

    // Registered from the first render until unmount, so connectors can find
    // the card as soon as it is laid out.
    let token = use_hook({
        let ctx = ctx.clone();
        let element_id = anchor_id.clone();
        move || ctx.register_anchor(global_position, DomAnchor { element_id })
    });

    {
        let ctx = ctx.clone();
        use_drop(move || ctx.deregister_anchor(global_position, token));
    }

    {
        let anchor_id = anchor_id.clone();
        let detail_id = detail_id.clone();
        let layout_tick = ctx.layout_tick;
        use_effect(move || {
            let _ = layout_tick();
            if !show_detail() {
                return;
            }

            let anchor_id = anchor_id.clone();
            let detail_id = detail_id.clone();
            spawn(async move {
                // Let the popup render once (hidden) so it can be measured.
                TimeoutFuture::new(0).await;
                if let Some(resolved) = measure_popup(&anchor_id, &detail_id) {
                    popup.set(Some(resolved));
                }
            });
        });
    }

    let popup_style = match popup() {
        Some(resolved) => format!(
            "position: fixed; left: {:.0}px; top: {:.0}px;",
            resolved.position.x, resolved.position.y
        ),
        None => "position: fixed; left: 0; top: 0; visibility: hidden;".to_string(),
    };
    let placement = popup()
        .map(|resolved| resolved.placement.name())
        .unwrap_or_default();
    let connector = ConnectorRequest::for_message(&message);
    let on_mounted_ctx = ctx.clone();

    rsx! {
        div {
            class: "message-card-wrapper",
            onmouseenter: move |_| show_detail.set(true),
            onmouseleave: move |_| {
                show_detail.set(false);
                popup.set(None);
            },
            div {
                id: "{anchor_id}",
                class: "message-card",
                onmounted: move |_| on_mounted_ctx.invalidate(),
                div { class: "message-card-type", "{message.message_type}" }
                div {
                    class: "message-card-meta",
                    span { "Pos:" }
                    span { class: "message-card-value", "{message.position}" }
                    span { "GP:" }
                    span { class: "message-card-value", "{message.global_position}" }
                }
            }
        }

        if show_detail() {
            div {
                id: "{detail_id}",
                class: "message-detail-popper",
                style: "{popup_style}",
                "data-placement": "{placement}",
                MessageDetail { message: message.clone() }
            }
        }

        {connector.map(|request| rsx! { CausationConnector { request } })}
    }
}

fn measure_popup(anchor_id: &str, detail_id: &str) -> Option<ResolvedPopup> {
    let reference = element_rect(anchor_id)?;
    let popup = element_rect(detail_id)?;
    let viewport = viewport_size()?;
    Some(place_popup(
        reference,
        popup.size(),
        viewport,
        PreferredPlacement::Auto(Align::Start),
        DETAIL_POPUP_OFFSET,
    ))
}

#[component]
fn MessageDetail(message: Message) -> Element {
    let data_rows = detail_rows(&message.data);
    let metadata_rows = message.metadata.as_ref().map(detail_rows);
    let time = message.time.as_deref().map(display_time);

    rsx! {
        div {
            class: "message-detail",
            h1 { class: "message-detail-type", "{message.message_type}" }
            div {
                class: "message-detail-field",
                "Stream Name:"
                span { "{message.stream_name}" }
            }
            div {
                class: "message-detail-field",
                "ID:"
                span { "{message.id}" }
            }
            if let Some(time) = time {
                div {
                    class: "message-detail-field",
                    "Time:"
                    span { "{time}" }
                }
            }
            DataTable { title: "Data", rows: data_rows }
            if let Some(rows) = metadata_rows {
                DataTable { title: "Metadata", rows }
            }
        }
    }
}

/// Key/value rows; long values are clamped to two lines by CSS, the full
/// text stays available in the tooltip.
#[component]
fn DataTable(title: String, rows: Vec<DetailRow>) -> Element {
    rsx! {
        div {
            class: "message-detail-section",
            h2 { "{title}" }
            table {
                class: "message-detail-table",
                tbody {
                    for row in rows.iter() {
                        tr {
                            key: "{row.key}",
                            td { class: "message-detail-key", "{row.key}:" }
                            td {
                                div {
                                    class: "message-detail-value",
                                    title: "{row.value}",
                                    "{row.value}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
