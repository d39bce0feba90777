use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    content::stagger_delay,
    rain::{self, BinaryString, XorShift32, STRING_COUNT, TICK_MS},
};

const MATRIX_LINES: usize = 20;

fn browser_seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

/// Seed the field once mounted and step it every tick until the owner is
/// disposed.
pub fn use_binary_rain(set_strings: WriteSignal<Vec<BinaryString>>) {
    let rng = StoredValue::new(XorShift32::default());

    // effects only run in the browser, so the server renders an empty field
    Effect::new(move |_| {
        let mut seeded = XorShift32::seeded(browser_seed());
        set_strings.set(rain::generate(STRING_COUNT, &mut seeded));
        rng.set_value(seeded);
    });

    let _ = use_interval_fn(
        move || {
            rng.update_value(|rng| set_strings.update(|strings| rain::tick(strings, rng)));
        },
        TICK_MS,
    );
}

/// Read one field of the string with `id`; empty once it is gone.
fn track_string<T: Default>(
    strings: ReadSignal<Vec<BinaryString>>,
    id: usize,
    field: impl Fn(&BinaryString) -> T,
) -> T {
    strings.with(|v| v.iter().find(|s| s.id == id).map(&field).unwrap_or_default())
}

#[component]
pub fn BinaryBackground(strings: ReadSignal<Vec<BinaryString>>) -> impl IntoView {
    view! {
        <div class="binary-background fixed inset-0 overflow-hidden pointer-events-none z-0">
            <For
                each=move || strings.with(|v| v.iter().map(|s| s.id).collect::<Vec<_>>())
                key=|id| *id
                children=move |id| {
                    view! {
                        <div
                            class="binary-string absolute text-xs"
                            style:left=move || track_string(strings, id, |s| format!("{}%", s.x))
                            style:top=move || track_string(strings, id, |s| format!("{}%", s.y))
                        >
                            {move || track_string(strings, id, |s| s.text.clone())}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn MatrixLines() -> impl IntoView {
    view! {
        <div class="matrix-lines fixed inset-0 overflow-hidden pointer-events-none z-0">
            <div class="matrix-gradient absolute inset-0"></div>
            {(0..MATRIX_LINES)
                .map(|i| {
                    view! {
                        <div
                            class="matrix-line absolute top-0 h-full"
                            style:left=format!("{}%", i * 5)
                            style:animation-delay=stagger_delay(i)
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
