//! Auto-rotating showcase carousel.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::icons::{ChevronLeft, ChevronRight, Play};
use crate::data::{detail_href, SlideItem};

const AUTO_ADVANCE_MS: i32 = 5000;

/// Next index, wrapping.
fn advance(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Previous index, wrapping.
fn rewind(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

#[component]
pub fn HeroSlider(slides: Vec<SlideItem>) -> impl IntoView {
    if slides.is_empty() {
        return None;
    }

    let len = slides.len();
    let slides = StoredValue::new(slides);
    let (current, set_current) = signal(0usize);

    // One repeating timer per mounted instance. Manual navigation sets the
    // index directly and leaves the automatic cadence alone.
    if let Some(window) = web_sys::window() {
        let tick = Closure::<dyn FnMut()>::new(move || {
            set_current.update(|c| *c = advance(*c, len));
        });
        let started = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            AUTO_ADVANCE_MS,
        );
        match started {
            Ok(id) => on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
                drop(tick);
            }),
            Err(err) => log::error!("failed to start slider timer: {err:?}"),
        }
    }

    let slide = move || slides.with_value(|s| s[current.get()].clone());

    Some(view! {
        <div class="relative w-full h-[50vh] md:h-[60vh] overflow-hidden mb-8 group">
            // Blurred backdrop from the current thumb
            <div
                class="absolute inset-0 bg-cover bg-center blur-sm scale-110 opacity-50 transition-all duration-700"
                style:background-image=move || format!("url({})", slide().thumb)
            ></div>
            <div class="absolute inset-0 bg-gradient-to-t from-gray-950 via-gray-950/60 to-transparent"></div>
            <div class="absolute inset-0 bg-gradient-to-r from-gray-950 via-black/50 to-transparent"></div>

            <div class="absolute inset-0 flex items-center">
                <div class="container mx-auto px-4 grid md:grid-cols-2 gap-8 items-center">
                    <div class="space-y-4 z-10">
                        <span class="text-blue-400 font-bold tracking-widest text-sm uppercase">
                            "Featured"
                        </span>
                        <h1 class="text-4xl md:text-6xl font-bold text-white line-clamp-2 leading-tight">
                            {move || slide().title}
                        </h1>
                        <div class="flex items-center gap-4 text-sm text-gray-300">
                            <span class="px-2 py-1 bg-yellow-500/20 text-yellow-400 border border-yellow-500/50 rounded">
                                {move || slide().rating.unwrap_or("N/A")}
                            </span>
                            <span>{move || slide().status.unwrap_or("Ongoing")}</span>
                            <span>{move || slide().kind.unwrap_or("Anime")}</span>
                        </div>
                        <p class="text-gray-400 line-clamp-3 md:line-clamp-4 max-w-lg">
                            {move || format!("Watch the latest episodes of {} now.", slide().title)}
                        </p>
                        <div class="pt-4 flex gap-4">
                            <a
                                href=move || detail_href(slide().endpoint)
                                class="flex items-center gap-2 px-8 py-3 bg-blue-500 hover:bg-blue-600 text-white rounded-full font-bold transition-transform hover:scale-105"
                            >
                                <Play class="fill-white w-5 h-5" />
                                " Watch Now"
                            </a>
                        </div>
                    </div>

                    // Poster card, hidden on mobile
                    <div class="hidden md:block justify-self-end relative z-10">
                        <div class="w-64 aspect-[2/3] rounded-xl overflow-hidden shadow-2xl border border-white/10 transform rotate-3">
                            <img
                                src=move || slide().thumb
                                alt=move || slide().title
                                class="w-full h-full object-cover"
                            />
                        </div>
                    </div>
                </div>
            </div>

            <button
                on:click=move |_| set_current.update(|c| *c = rewind(*c, len))
                class="absolute left-4 top-1/2 -translate-y-1/2 p-2 bg-black/50 rounded-full hover:bg-blue-500 text-white opacity-0 group-hover:opacity-100 transition-all"
            >
                <ChevronLeft class="w-6 h-6" />
            </button>
            <button
                on:click=move |_| set_current.update(|c| *c = advance(*c, len))
                class="absolute right-4 top-1/2 -translate-y-1/2 p-2 bg-black/50 rounded-full hover:bg-blue-500 text-white opacity-0 group-hover:opacity-100 transition-all"
            >
                <ChevronRight class="w-6 h-6" />
            </button>

            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2">
                {(0..len)
                    .map(|idx| {
                        view! {
                            <button
                                on:click=move |_| set_current.set(idx)
                                class=move || {
                                    if current.get() == idx {
                                        "w-8 h-2 rounded-full transition-all bg-blue-500"
                                    } else {
                                        "w-2 h-2 rounded-full transition-all bg-gray-500"
                                    }
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_modulo_len() {
        assert_eq!(advance(0, 3), 1);
        assert_eq!(advance(2, 3), 0);
        // N automatic ticks from zero land on N mod len.
        let mut idx = 0;
        for _ in 0..7 {
            idx = advance(idx, 3);
        }
        assert_eq!(idx, 7 % 3);
    }

    #[test]
    fn test_rewind_wraps_modulo_len() {
        assert_eq!(rewind(1, 3), 0);
        assert_eq!(rewind(0, 3), 2);
        assert_eq!(rewind(0, 1), 0);
    }

    #[test]
    fn test_manual_navigation_is_inverse() {
        for len in 1..5 {
            for idx in 0..len {
                assert_eq!(rewind(advance(idx, len), len), idx);
            }
        }
    }
}
