use leptos::*;
use leptos_router::*;
use tracing::error;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::pages::{paths, AddEmployee, EmployeeDetails};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = match ApiClient::new(&config.api_base) {
        Ok(api) => api,
        Err(err) => {
            error!(%err, api_base = %config.api_base, "cannot start without a usable API base");
            return view! {
                <div class="app-container">
                    <p class="error">{err.to_string()}</p>
                </div>
            }
            .into_view();
        }
    };
    provide_context(api);

    view! {
        <Router>
            <main class="app-container">
                <Routes>
                    <Route path=paths::CREATE view=AddEmployee/>
                    <Route path=paths::LIST view=EmployeeDetails/>
                </Routes>
            </main>
        </Router>
    }
    .into_view()
}
