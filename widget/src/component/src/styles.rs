use consts::{STYLES_ID, WIDGET_ID};
use leptos::prelude::*;

fn stylesheet() -> String {
    format!(
        r#"
#{WIDGET_ID} {{ position: fixed; bottom: 20px; left: 20px; width: 300px; z-index: 9999; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }}
.widget-banner {{ position: relative; background: white; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); overflow: hidden; cursor: pointer; transition: transform 0.2s; }}
.widget-banner:hover {{ transform: scale(1.05); }}
.widget-banner video {{ width: 100%; height: 180px; object-fit: cover; display: block; }}
.widget-banner-text {{ padding: 12px; text-align: center; font-weight: 600; font-size: 14px; color: #333; background: #f9f9f9; }}
.widget-close {{ position: absolute; top: 8px; right: 8px; width: 28px; height: 28px; border: none; border-radius: 50%; background: rgba(0, 0, 0, 0.6); color: white; font-size: 18px; cursor: pointer; z-index: 1; }}
.widget-overlay {{ position: fixed; inset: 0; background: rgba(0, 0, 0, 0.7); z-index: 10000; display: flex; align-items: center; justify-content: center; }}
.widget-iframe-container {{ position: relative; width: 90%; height: 90%; max-width: 1200px; background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.3); }}
.widget-iframe-container iframe {{ width: 100%; height: 100%; border: none; }}
.widget-iframe-close {{ position: absolute; top: 12px; right: 12px; width: 40px; height: 40px; border: 2px solid #e0e0e0; border-radius: 50%; background: white; font-size: 24px; cursor: pointer; z-index: 1; }}
"#
    )
}

#[component]
pub fn WidgetStyles() -> impl IntoView {
    view! { <style id=STYLES_ID>{stylesheet()}</style> }
}

#[cfg(test)]
mod tests {
    use super::stylesheet;

    #[test]
    fn stylesheet_targets_banner_id() {
        let css = stylesheet();
        assert!(css.contains("#store-widget-banner {"));
        assert!(css.contains(".widget-overlay {"));
    }
}
