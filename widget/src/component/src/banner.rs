use std::fmt::Debug;
use std::future::Future;

use consts::WIDGET_ID;
use leptos::html::Video;
use leptos::prelude::*;
use leptos::web_sys::MouseEvent;
use state::banner::BannerController;
use wasm_bindgen_futures::JsFuture;

/// Awaits a `play()` promise so a refused autoplay is logged rather than left
/// rejected on the host page. Returns whether playback started.
async fn settle_playback<T, E: Debug>(playback: impl Future<Output = Result<T, E>>) -> bool {
    match playback.await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("banner video playback refused: {e:?}");
            false
        }
    }
}

#[component]
fn BannerCard(banner: BannerController) -> impl IntoView {
    let video_ref = NodeRef::<Video>::new();

    // attributes alone don't reliably keep autoplay muted, set the properties as well
    Effect::new(move |_| {
        let vid = video_ref.get()?;
        vid.set_muted(true);
        vid.set_loop(true);
        vid.set_autoplay(true);
        match vid.play() {
            Ok(promise) => leptos::task::spawn_local(async move {
                settle_playback(JsFuture::from(promise)).await;
            }),
            Err(e) => log::warn!("banner video did not start: {e:?}"),
        }
        Some(())
    });

    view! {
        <div id=WIDGET_ID>
            <div class="widget-banner" on:click=move |_| banner.open_content()>
                <button
                    class="widget-close"
                    aria-label="Close"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        banner.dismiss();
                    }
                >
                    "×"
                </button>
                <video
                    node_ref=video_ref
                    autoplay=true
                    muted=true
                    playsinline=true
                    on:loadeddata=move |_| banner.video_loaded()
                >
                    <source src=banner.video_url() type="video/mp4" />
                </video>
                <div class="widget-banner-text">{banner.text()}</div>
            </div>
        </div>
    }
}

/// Floating banner, present in the DOM only while the controller is mounted.
#[component]
pub fn Banner(banner: BannerController) -> impl IntoView {
    view! {
        <Show when=move || banner.is_mounted()>
            <BannerCard banner />
        </Show>
    }
}
