use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeColor {
    #[default]
    Green,
    Yellow,
    Red,
    Blue,
}

impl BadgeColor {
    fn class(self) -> &'static str {
        match self {
            BadgeColor::Green => {
                "px-3 py-1 text-sm font-bold font-mono rounded border w-fit bg-green-500/20 text-green-400 border-green-500/50"
            }
            BadgeColor::Yellow => {
                "px-3 py-1 text-sm font-bold font-mono rounded border w-fit bg-yellow-500/20 text-yellow-400 border-yellow-500/50"
            }
            BadgeColor::Red => {
                "px-3 py-1 text-sm font-bold font-mono rounded border w-fit bg-red-500/20 text-red-400 border-red-500/50"
            }
            BadgeColor::Blue => {
                "px-3 py-1 text-sm font-bold font-mono rounded border w-fit bg-blue-500/20 text-blue-400 border-blue-500/50"
            }
        }
    }
}

#[component]
pub fn Badge(children: Children, #[prop(optional)] color: BadgeColor) -> impl IntoView {
    view! {
        <span class=color.class()>
            {children()}
        </span>
    }
}
