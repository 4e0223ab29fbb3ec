//! Small browser helpers shared by the components.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::config::TOAST_MILLIS;

/// Shows a transient notification at the bottom of the page.
///
/// The toast is a plain `div` appended to `<body>` and removed after
/// `TOAST_MILLIS`, so it never blocks interaction.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "8px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Asks the user to confirm a destructive action. Anything but an explicit
/// "OK" counts as a refusal.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Formats a price in baht with thousands separators. Satang are shown only
/// when present.
pub fn format_price(price: f64) -> String {
    let satang = (price * 100.0).round() as i64;
    let baht = (satang / 100).to_formatted_string(&Locale::en);
    match satang % 100 {
        0 => format!("฿{}", baht),
        rest => format!("฿{}.{:02}", baht, rest),
    }
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn price_uses_thousands_separators() {
        assert_eq!(format_price(1250.0), "฿1,250");
        assert_eq!(format_price(35.0), "฿35");
        assert_eq!(format_price(1234567.5), "฿1,234,567.50");
        assert_eq!(format_price(0.0), "฿0");
    }
}
