use component::banner::Banner;
use component::overlay::ContentOverlay;
use component::styles::WidgetStyles;
use leptos::prelude::*;
use state::banner::BannerController;

#[component]
pub fn WidgetRoot(banner: BannerController) -> impl IntoView {
    let overlay = banner.overlay();

    view! {
        <WidgetStyles />
        <Banner banner />
        <ContentOverlay overlay />
    }
}
