use leptos::prelude::*;

use crate::components::anime_card::AnimeCard;
use crate::components::hero_slider::HeroSlider;
use crate::data::{featured_slides, showcase_cards};

#[component]
pub fn Browse() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-950 via-gray-900 to-gray-950">
            <HeroSlider slides=featured_slides() />

            <section class="container mx-auto px-4 pb-16">
                <h2 class="text-2xl font-bold text-white mb-6">"Latest Updates"</h2>
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-4">
                    {showcase_cards()
                        .into_iter()
                        .map(|item| view! { <AnimeCard item /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
