use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::section::{self, SectionBounds, Viewport};

/// The browser window. Only touch it from event handlers and effects, never
/// while rendering on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        let el = document()
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds {
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

/// Click handler target: smooth-scroll to the section with DOM id `id`.
pub fn go_to(id: &str) {
    section::scroll_to_section(&DomViewport, id);
}
