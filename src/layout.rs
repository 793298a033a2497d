//! Console Layout
//!
//! Sidebar on the left, header on top, page content below.

use leptos::prelude::*;

use crate::components::{Header, Sidebar};

#[component]
pub fn ConsoleLayout(children: Children) -> impl IntoView {
    view! {
        <div class="console-layout">
            <Sidebar />
            <div class="console-main">
                <Header />
                <main class="console-content">{children()}</main>
            </div>
        </div>
    }
}
