use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/10 bg-gray-950 py-12 mt-auto">
            <div class="container mx-auto px-4 flex flex-col md:flex-row justify-between items-center text-gray-500 text-sm">
                <p>"\u{00A9} 2026 API Explorer Contributors. MIT License."</p>
                <p class="mt-4 md:mt-0">
                    "Data is scraped on demand from Komiku and Winbu \u{2014} for educational use."
                </p>
            </div>
        </footer>
    }
}
