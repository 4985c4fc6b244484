use leptos::prelude::*;

use super::icons::{PlayCircle, Star};
use crate::data::{detail_href, CardItem};

#[component]
pub fn AnimeCard(item: CardItem) -> impl IntoView {
    let href = detail_href(item.endpoint);

    view! {
        <a
            href=href
            class="group relative block bg-gray-900 rounded-xl overflow-hidden shadow-lg border border-white/5 hover:border-blue-500/50 transition-all duration-300"
        >
            <div class="aspect-[2/3] overflow-hidden relative">
                <img
                    src=item.thumb
                    alt=item.title
                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                    loading="lazy"
                />

                <div class="absolute inset-0 bg-gradient-to-t from-black/90 via-black/20 to-transparent opacity-60 group-hover:opacity-80 transition-opacity"></div>

                <div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <PlayCircle class="w-12 h-12 text-blue-400 fill-black/50" />
                </div>

                <div class="absolute top-2 left-2 flex flex-col gap-1">
                    {item
                        .rating
                        .map(|rating| {
                            view! {
                                <span class="px-2 py-1 bg-black/60 backdrop-blur-sm text-yellow-400 text-xs font-bold rounded flex items-center gap-1">
                                    <Star class="w-3 h-3 fill-yellow-400" />
                                    {rating}
                                </span>
                            }
                        })}
                </div>

                <div class="absolute top-2 right-2">
                    <span class="px-2 py-1 bg-blue-500/80 backdrop-blur-sm text-white text-xs font-bold rounded">
                        {item.kind.unwrap_or("Anime")}
                    </span>
                </div>
            </div>

            <div class="p-3">
                <h3 class="text-white font-semibold text-sm line-clamp-2 leading-tight group-hover:text-blue-400 transition-colors">
                    {item.title}
                </h3>
                {item
                    .episode
                    .map(|episode| view! { <p class="text-gray-400 text-xs mt-1">{episode}</p> })}
            </div>
        </a>
    }
}
