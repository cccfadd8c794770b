//! Live readings screen
//!
//! Polls /api/data at a fixed period and re-renders the reading cards
//! from whatever the latest successful response was.

use airwatch_model::Reading;
use leptos::prelude::*;

/// Displays live air quality readings, refreshed by a recurring fetch.
///
/// The interval handle is cleared on unmount, so navigating away stops
/// the polling; a spinner shows only until the very first request
/// settles, successfully or not.
#[component]
pub fn ReadingsScreen() -> impl IntoView {
    let readings = RwSignal::new(Vec::<Reading>::new());
    let loading = RwSignal::new(true);

    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        use leptos::leptos_dom::helpers::set_interval_with_handle;
        use leptos::task::spawn_local;
        use std::time::Duration;

        /// Fixed poll period for the readings endpoint
        const POLL_PERIOD_MS: u64 = 5000;

        let refresh = move || {
            spawn_local(async move {
                match crate::api::fetch_readings().await {
                    Ok(data) => readings.set(data),
                    Err(e) => leptos::logging::warn!("Error fetching air quality data: {}", e),
                }
                loading.set(false);
            });
        };

        refresh();
        if let Ok(handle) =
            set_interval_with_handle(refresh, Duration::from_millis(POLL_PERIOD_MS))
        {
            on_cleanup(move || handle.clear());
        }
    }

    view! {
        <section>
            <h2>"Air Quality Data"</h2>
            {move || {
                if loading.get() {
                    view! {
                        <p style="text-align: center; color: #4CAF50;">"Loading..."</p>
                    }
                    .into_any()
                } else if readings.with(|r| r.is_empty()) {
                    view! {
                        <p style="text-align: center; color: #888;">
                            "No air quality data available."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div>
                            {readings
                                .get()
                                .into_iter()
                                .map(|r| {
                                    view! {
                                        <div style="background: white; border-radius: 8px; padding: 1rem; margin-bottom: 0.75rem; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
                                            <p style="margin: 0; color: #555;">"Value:"</p>
                                            <p style="margin: 0 0 0.5rem; font-weight: bold;">
                                                {r.air_quality}
                                            </p>
                                            <p style="margin: 0; color: #555;">"Time:"</p>
                                            <p style="margin: 0; font-weight: bold;">
                                                {r.local_time()}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
