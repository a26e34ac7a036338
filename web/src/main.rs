use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::dashboard::labels::dashboard_title;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    dioxus::logger::initialize_default();

    let server = match api::server::DashboardServer::from_env(App) {
        Ok(server) => server,
        Err(err) => {
            dioxus::logger::tracing::error!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = server.run().await {
        dioxus::logger::tracing::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Shared language code; AppNavbar writes it when the locale changes.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        Router::<Route> {}
    }
}

/// Layout wrapping every route in the shared navbar.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {
            Link { class: "navbar__link", to: Route::Dashboard {}, "{dashboard_title()}" }
        }
        Outlet::<Route> {}
    }
}
