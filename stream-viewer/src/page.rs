//! The stream page: address-bar driven list of stream views plus the side panel.

use dioxus::prelude::*;

mod context;
pub mod effects;
mod shell;

pub use context::{route_in_root, ViewerContext, PAGE_ROOT_ID};
pub use shell::PageShell;

#[component]
pub fn StreamPage() -> Element {
    rsx! {
        PageShell {}
    }
}
