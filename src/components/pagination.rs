//! Pagination Component
//!
//! Server-driven: the footer trusts the page info the backend reported.

use console_core::listing::PageInfo;
use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] info: Signal<PageInfo>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <span class="pagination-range">
                {move || {
                    let (from, to) = info.get().showing_range();
                    format!("Showing {} to {} of {}", from, to, info.get().total)
                }}
            </span>
            <div class="pagination-controls">
                <button
                    disabled=move || !info.get().has_prev()
                    on:click=move |_| on_page.run(info.get_untracked().page.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pagination-page">
                    {move || format!("Page {} of {}", info.get().page, info.get().total_pages)}
                </span>
                <button
                    disabled=move || !info.get().has_next
                    on:click=move |_| on_page.run(info.get_untracked().page + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
