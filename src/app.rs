mod background;
mod contact;
mod homepage;
mod icons;
mod navbar;
mod projects;
mod skills;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="build-time" content=env!("BUILD_TIME") />
                <link rel="stylesheet" id="leptos" href="/pkg/binary-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-mono bg-black text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Menan Mohamed - {title}") />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <main class="flex flex-col min-h-screen justify-center items-center gap-4">
            <h1 class="text-2xl font-bold text-green-400">"404 - Page not found."</h1>
            <a href="/" class="text-green-300 hover:text-green-100 underline">
                "cd ~"
            </a>
        </main>
    }
}
