//! Interactive debugger for one documented endpoint: fill in the declared
//! parameters, fire a GET, inspect the outcome.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::badge::{Badge, BadgeColor};
use super::icons::{Check, ChevronDown, ChevronUp, Copy, Loader, Send};
use super::json_view::JsonView;
use crate::api::{build_path, send_debug_request, DebugReport, RequestError, RequestOutcome};
use crate::config::use_api_config;
use crate::data::Endpoint;

const COPY_ACK_MS: i32 = 2000;

#[component]
pub fn EndpointDebugger(endpoint: Endpoint) -> impl IntoView {
    let config = use_api_config();
    let endpoint = StoredValue::new(endpoint);

    let (expanded, set_expanded) = signal(false);
    let (values, set_values) = signal(BTreeMap::<&'static str, String>::new());
    let (in_flight, set_in_flight) = signal(false);
    let (report, set_report) = signal(None::<DebugReport>);
    let (copied, set_copied) = signal(false);

    let built_path = Memo::new(move |_| {
        endpoint.with_value(|ep| values.with(|v| build_path(ep.path, &ep.params, v)))
    });
    let request_url = Memo::new(move |_| config.request_url(&built_path.get()));

    let send = move |_| {
        if in_flight.get_untracked() {
            return;
        }
        let url = request_url.get_untracked();
        set_in_flight.set(true);
        set_report.set(None);
        spawn_local(async move {
            let outcome = send_debug_request(&url).await;
            set_report.set(Some(outcome));
            set_in_flight.set(false);
        });
    };

    let copy_response = move |_| {
        let Some(text) = report.with_untracked(|r| {
            r.as_ref()
                .and_then(|rep| rep.body())
                .map(|body| serde_json::to_string_pretty(body).unwrap_or_default())
        }) else {
            return;
        };
        spawn_local(async move {
            let window = web_sys::window().unwrap();
            let clipboard = window.navigator().clipboard();
            let _ = JsFuture::from(clipboard.write_text(&text)).await;
            set_copied.set(true);
            // Reset after 2 seconds
            let cb = wasm_bindgen::closure::Closure::once(move || {
                set_copied.set(false);
            });
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    COPY_ACK_MS,
                )
                .unwrap();
            cb.forget();
        });
    };

    view! {
        <div class="group bg-gray-900/30 backdrop-blur-sm border border-white/10 rounded-xl overflow-hidden hover:border-blue-500/50 transition-all duration-300">
            // Header, always visible
            <div class="p-6 cursor-pointer" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                <div class="flex flex-col md:flex-row md:items-center gap-4">
                    <Badge color=BadgeColor::Green>
                        {endpoint.with_value(|ep| ep.method)}
                    </Badge>

                    <code class="flex-1 text-white font-mono text-sm md:text-base break-all">
                        {endpoint.with_value(|ep| ep.path)}
                    </code>

                    <div class="flex items-center gap-2">
                        {move || {
                            if expanded.get() {
                                view! { <ChevronUp class="w-5 h-5 text-blue-400" /> }.into_any()
                            } else {
                                view! { <ChevronDown class="w-5 h-5 text-gray-400" /> }.into_any()
                            }
                        }}
                    </div>
                </div>

                <p class="text-gray-400 text-sm mt-3 pl-0 md:pl-20">
                    {endpoint.with_value(|ep| ep.description)}
                </p>
            </div>

            // Debugger panel
            {move || {
                expanded
                    .get()
                    .then(|| {
                        let params = endpoint.with_value(|ep| ep.params.clone());
                        view! {
                            <div class="border-t border-white/10 p-6 bg-black/20 space-y-4">
                                {(!params.is_empty())
                                    .then(|| {
                                        view! {
                                            <div class="space-y-3">
                                                <h4 class="text-sm font-bold text-gray-300">"Parameters"</h4>
                                                {params
                                                    .iter()
                                                    .copied()
                                                    .map(|param| {
                                                        view! {
                                                            <div>
                                                                <label class="text-xs text-gray-500 font-mono flex items-center gap-2 mb-1">
                                                                    {param.name}
                                                                    {param
                                                                        .required
                                                                        .then(|| view! { <span class="text-red-400">"*"</span> })}
                                                                </label>
                                                                <input
                                                                    type="text"
                                                                    placeholder=param.placeholder
                                                                    prop:value=move || {
                                                                        values
                                                                            .with(|v| v.get(param.name).cloned().unwrap_or_default())
                                                                    }
                                                                    on:input=move |ev| {
                                                                        let value = event_target_value(&ev);
                                                                        set_values
                                                                            .update(|v| {
                                                                                v.insert(param.name, value);
                                                                            });
                                                                    }
                                                                    class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-2 text-white text-sm focus:outline-none focus:border-blue-500 transition-colors"
                                                                />
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })}

                                <div>
                                    <h4 class="text-xs text-gray-500 mb-2">"Preview URL:"</h4>
                                    <code class="block bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm text-cyan-400 break-all">
                                        {request_url}
                                    </code>
                                </div>

                                <button
                                    on:click=send
                                    disabled=move || in_flight.get()
                                    class="w-full md:w-auto px-6 py-3 bg-blue-500 hover:bg-blue-600 disabled:bg-gray-600 text-white rounded-lg font-medium flex items-center justify-center gap-2 transition-all"
                                >
                                    {move || {
                                        if in_flight.get() {
                                            view! {
                                                <Loader class="w-5 h-5 animate-spin" />
                                                " Sending..."
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <Send class="w-5 h-5" />
                                                " Send Request"
                                            }
                                                .into_any()
                                        }
                                    }}
                                </button>

                                {move || {
                                    report
                                        .get()
                                        .map(|rep| {
                                            let success = rep.is_success();
                                            let has_body = rep.body().is_some();
                                            let status_class = if success {
                                                "px-3 py-1 rounded font-bold bg-green-500/20 text-green-400 border border-green-500/50"
                                            } else {
                                                "px-3 py-1 rounded font-bold bg-red-500/20 text-red-400 border border-red-500/50"
                                            };
                                            let status_label = format!(
                                                "{} {}",
                                                if success { "\u{2705}" } else { "\u{274C}" },
                                                rep.status,
                                            );
                                            let duration_label = format!(
                                                "\u{23F1} {}ms",
                                                rep.duration_ms,
                                            );
                                            view! {
                                                <div class="space-y-3">
                                                    <div class="flex items-center gap-4 text-sm">
                                                        <span class=status_class>{status_label}</span>
                                                        <span class="px-3 py-1 bg-yellow-500/20 text-yellow-400 border border-yellow-500/50 rounded font-mono">
                                                            {duration_label}
                                                        </span>
                                                        {has_body
                                                            .then(|| {
                                                                view! {
                                                                    <button
                                                                        on:click=copy_response
                                                                        class="ml-auto px-3 py-1 bg-gray-700 hover:bg-gray-600 text-white rounded flex items-center gap-2 transition-colors"
                                                                    >
                                                                        {move || {
                                                                            if copied.get() {
                                                                                view! {
                                                                                    <Check class="w-4 h-4 text-green-400" />
                                                                                    " Copied"
                                                                                }
                                                                                    .into_any()
                                                                            } else {
                                                                                view! {
                                                                                    <Copy class="w-4 h-4" />
                                                                                    " Copy"
                                                                                }
                                                                                    .into_any()
                                                                            }
                                                                        }}
                                                                    </button>
                                                                }
                                                            })}
                                                    </div>

                                                    <div class="rounded-lg overflow-hidden border border-gray-700">
                                                        <div class="bg-gray-800 px-3 py-2 text-xs text-gray-400 font-mono">
                                                            "Response:"
                                                        </div>
                                                        {match rep.outcome {
                                                            RequestOutcome::Failed(err) => {
                                                                let class = match err {
                                                                    RequestError::Transport { .. } => {
                                                                        "bg-red-900/20 p-4 text-red-400 text-sm"
                                                                    }
                                                                    RequestError::InvalidBody { .. } => {
                                                                        "bg-orange-900/20 p-4 text-orange-400 text-sm"
                                                                    }
                                                                };
                                                                view! {
                                                                    <div class=class>{format!("\u{274C} {err}")}</div>
                                                                }
                                                                    .into_any()
                                                            }
                                                            RequestOutcome::Body(Some(value)) => {
                                                                view! { <JsonView value /> }.into_any()
                                                            }
                                                            RequestOutcome::Body(None) => {
                                                                view! {
                                                                    <div class="p-4 text-gray-500 text-sm">
                                                                        "No data in response."
                                                                    </div>
                                                                }
                                                                    .into_any()
                                                            }
                                                        }}
                                                    </div>
                                                </div>
                                            }
                                        })
                                }}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
