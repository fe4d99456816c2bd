pub mod app;
pub mod init;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use any_spawner::Executor;
    use leptos::prelude::*;
    use state::widget_config::WidgetSettings;
    use utils::host;

    use crate::app::WidgetRoot;
    use crate::init::{launch, Bootstrap};

    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    // event tracking spawns local tasks before the app is mounted
    if let Err(e) = Executor::init_wasm_bindgen() {
        log::warn!("executor already initialised: {e:?}");
    }

    // the script tag is only reachable while this script is still executing
    let settings = WidgetSettings::from_host();

    let bootstrap = Bootstrap::with_backend(settings, host::user_agent());
    Executor::spawn_local(launch(bootstrap, host::document_interactive(), |banner| {
        leptos::mount::mount_to_body(move || view! { <WidgetRoot banner /> });
    }));
}
