use leptos::prelude::*;

use crate::components::endpoint_debugger::EndpointDebugger;
use crate::components::icons::Code2;
use crate::data::endpoint_sections;

#[component]
pub fn Home() -> impl IntoView {
    let sections = endpoint_sections();

    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-950 via-gray-900 to-gray-950">
            // Hero
            <div class="container mx-auto px-4 py-16 text-center">
                <div class="inline-flex items-center mb-4 px-4 py-2 bg-blue-500/10 border border-blue-500/30 rounded-full">
                    <Code2 class="w-5 h-5 text-blue-400 mr-2" />
                    <span class="text-blue-400 font-mono text-sm">"API Explorer"</span>
                </div>
                <h1 class="text-5xl md:text-7xl font-bold mb-4 bg-gradient-to-r from-white via-blue-100 to-purple-200 bg-clip-text text-transparent">
                    "Komiku & Winbu API"
                </h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto mb-8">
                    "Interactive REST API documentation for manga & anime data scraping"
                </p>
                <div class="flex flex-wrap gap-4 justify-center text-sm">
                    <span class="px-4 py-2 bg-gray-900/50 border border-white/10 rounded-lg">
                        "\u{1F310} Multi-language support"
                    </span>
                    <span class="px-4 py-2 bg-gray-900/50 border border-white/10 rounded-lg">
                        "\u{26A1} Fast caching"
                    </span>
                    <span class="px-4 py-2 bg-gray-900/50 border border-white/10 rounded-lg">
                        "\u{1F4E1} Real-time scraping"
                    </span>
                </div>
            </div>

            // Endpoint catalog
            <div class="container mx-auto px-4 pb-16 space-y-12">
                {sections
                    .into_iter()
                    .map(|section| {
                        let heading_class = format!(
                            "text-3xl font-bold bg-gradient-to-r {} bg-clip-text text-transparent",
                            section.accent,
                        );
                        let badge_class = format!(
                            "px-3 py-1 text-xs font-bold rounded-full bg-gradient-to-r {} text-white",
                            section.accent,
                        );
                        view! {
                            <section>
                                <div class="mb-6 flex items-center gap-4">
                                    <h2 class=heading_class>{section.category}</h2>
                                    <span class=badge_class>{section.badge}</span>
                                </div>

                                <div class="grid gap-4">
                                    {section
                                        .items
                                        .into_iter()
                                        .map(|endpoint| view! { <EndpointDebugger endpoint /> })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>

            // Informational panels
            <div class="container mx-auto px-4 pb-12 space-y-6">
                <div class="bg-yellow-500/10 border border-yellow-500/30 rounded-xl p-6">
                    <h3 class="text-yellow-400 font-bold mb-3 flex items-center gap-2">
                        "\u{26A0} Usage Notes"
                    </h3>
                    <ul class="text-gray-300 text-sm space-y-2 list-disc list-inside">
                        <li>"Click an endpoint to expand the debugger form"</li>
                        <li>"Fill in the required parameters (marked with *)"</li>
                        <li>"Hit \"Send Request\" to test the API"</li>
                        <li>"The response is rendered with syntax highlighting"</li>
                    </ul>
                </div>

                <div class="bg-blue-500/10 border border-blue-500/30 rounded-xl p-6">
                    <h3 class="text-blue-400 font-bold mb-3 flex items-center gap-2">
                        "\u{1F6E1} Rate Limiting"
                    </h3>
                    <ul class="text-gray-300 text-sm space-y-2 list-disc list-inside">
                        <li><strong>"Limit: "</strong>"60 requests per minute per IP address"</li>
                        <li><strong>"On limit: "</strong>"HTTP 429 \"Rate limit exceeded\""</li>
                        <li><strong>"Automatic reset: "</strong>"the counter resets every minute"</li>
                        <li><strong>"Cache: "</strong>"results are cached for 30 minutes"</li>
                    </ul>
                </div>

                <div class="bg-purple-500/10 border border-purple-500/30 rounded-xl p-6">
                    <h3 class="text-purple-400 font-bold mb-3 flex items-center gap-2">
                        "\u{1F4A1} Tips & Troubleshooting"
                    </h3>
                    <ul class="text-gray-300 text-sm space-y-2 list-disc list-inside">
                        <li><strong>"Null response: "</strong>"try a different query or wait for the cache to expire (30 minutes)"</li>
                        <li><strong>"Slow response: "</strong>"the first request takes ~2-3s (scraping), later ones ~100ms (cache)"</li>
                        <li><strong>"CORS error: "</strong>"the API allows all origins for development; tighten for production"</li>
                        <li><strong>"Rate limited: "</strong>"wait 60 seconds before retrying"</li>
                        <li><strong>"Slug format: "</strong>"lowercase with dashes, e.g. "<code>"one-piece"</code></li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
