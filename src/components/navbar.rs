use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::icons::{Code2, Github};

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let is_home = move || pathname() == "/";
    let is_browse = move || pathname().starts_with("/browse");

    view! {
        <nav class="sticky top-0 z-50 bg-gray-950/80 backdrop-blur-md border-b border-white/10">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center space-x-2">
                        <Code2 class="w-8 h-8 text-blue-500" />
                        <span class="text-xl font-bold bg-gradient-to-r from-white to-gray-400 bg-clip-text text-transparent">
                            "API Explorer"
                        </span>
                    </A>

                    <div class="flex items-center space-x-6">
                        <A
                            href="/"
                            attr:class=move || {
                                if is_home() {
                                    "text-sm font-medium transition-colors text-white"
                                } else {
                                    "text-sm font-medium transition-colors text-gray-400 hover:text-white"
                                }
                            }
                        >
                            "Endpoints"
                        </A>
                        <A
                            href="/browse"
                            attr:class=move || {
                                if is_browse() {
                                    "text-sm font-medium transition-colors text-white"
                                } else {
                                    "text-sm font-medium transition-colors text-gray-400 hover:text-white"
                                }
                            }
                        >
                            "Browse"
                        </A>
                        <a
                            href="https://github.com/Arcie94/scraping-hit-api-winbu.net-komiku.org-website"
                            target="_blank"
                            rel="noreferrer"
                            class="text-sm font-medium text-gray-400 hover:text-blue-400 transition-colors flex items-center gap-2"
                        >
                            <Github class="w-5 h-5" />
                            <span class="hidden md:inline">"GitHub"</span>
                        </a>
                        <span class="px-3 py-1 bg-green-500/20 text-green-400 border border-green-500/50 rounded-full text-xs font-bold">
                            "ONLINE"
                        </span>
                    </div>
                </div>
            </div>
        </nav>
    }
}
