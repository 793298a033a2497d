use leptos::prelude::*;

/// Centered card shared by the sign-in and recovery pages
#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-brand">"Resto Admin"</div>
                <h2>{title}</h2>
                <p class="auth-subtitle">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}

/// Error line under an auth form
pub fn form_error(error: ReadSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="form-error">{message}</p> })
}
