use employee_desk::app::App;
use employee_desk::config::AppConfig;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    tracing_wasm::set_as_global_default_with_config(config.tracing());
    tracing::info!(api_base = %config.api_base, "starting employee desk");
    mount_to_body(move || view! { <App config=config.clone()/> })
}
