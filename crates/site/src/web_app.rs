use form_app_auth::{FormPolicy, PasswordStrengthPage, ShowcasePage, SignInPage, SignUpPage};
use form_ui::prelude::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

/// Route path and link copy for the top navigation, in display order.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("/sign-in", "Sign in"),
    ("/sign-up", "Sign up"),
    ("/password", "Password strength"),
    ("/components", "Components"),
];

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    provide_context(FormPolicy::load());

    view! {
        <Title text="Form Components" />
        <Meta name="description" content="Reusable form fields and buttons with local sign-in and sign-up validation." />

        <Router>
            <NavLinks />
            <main class="site-root">
                <Routes>
                    <Route path="" view=SignInPage />
                    <Route path="/sign-in" view=SignInPage />
                    <Route path="/sign-up" view=SignUpPage />
                    <Route path="/password" view=PasswordStrengthPage />
                    <Route path="/components" view=ShowcasePage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn NavLinks() -> impl IntoView {
    let links = NAV_ITEMS
        .into_iter()
        .map(|(href, label)| view! { <A href=href>{label}</A> })
        .collect_view();

    view! {
        <nav class="site-nav" aria-label="Pages">
            <Cluster gap=LayoutGap::Sm>{links}</Cluster>
        </nav>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <Card title="Page not found" layout_class="auth-card">
            <Stack>
                <p>{move || format!("Nothing lives at {}.", location.pathname.get())}</p>
                <A href="/sign-in">"Back to sign in"</A>
            </Stack>
        </Card>
    }
}
