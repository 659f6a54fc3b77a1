// InterPlus Fenêtre site entry point
use interplus_landing::App;
use interplus_landing::config::SITE;
use interplus_landing::lead::Recaptcha;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = Recaptcha::install(SITE.recaptcha_site_key, SITE.recaptcha_language) {
        tracing::error!(%err, "reCAPTCHA script could not be installed");
    }

    leptos::mount::mount_to_body(|| view! { <App /> });
}
