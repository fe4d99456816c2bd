use consts::OVERLAY_FRAME_TITLE;
use leptos::prelude::*;
use leptos::web_sys::MouseEvent;
use state::overlay::{CloseTrigger, OverlayController};

#[component]
pub fn ContentOverlay(overlay: OverlayController) -> impl IntoView {
    let on_backdrop = move |ev: MouseEvent| {
        // clicks bubbling up from the content frame don't count
        if ev.target() == ev.current_target() {
            overlay.close(CloseTrigger::Backdrop);
        }
    };

    view! {
        <Show when=move || overlay.is_open()>
            <div class="widget-overlay" on:click=on_backdrop>
                <div class="widget-iframe-container">
                    <button
                        class="widget-iframe-close"
                        aria-label="Close"
                        on:click=move |_| overlay.close(CloseTrigger::CloseButton)
                    >
                        "×"
                    </button>
                    <iframe
                        src=move || overlay.url().unwrap_or_default()
                        title=OVERLAY_FRAME_TITLE
                    ></iframe>
                </div>
            </div>
        </Show>
    }
}
