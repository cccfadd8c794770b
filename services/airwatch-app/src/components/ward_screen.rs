//! Ward registry screen
//!
//! Loads the ward collection once on mount, offers a composition form
//! (name, optional link, facility checklist with per-type name/link),
//! and a delete action per listed ward. Local state changes only after
//! the corresponding request resolves.

use airwatch_model::{FacilityField, FacilityType, RegistryForm, Ward};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::facility_badge::FacilityBadge;

const INPUT_STYLE: &str = "display: block; width: 100%; box-sizing: border-box; \
     border: 1px solid #ccc; border-radius: 5px; padding: 0.6rem; margin: 0.3rem 0;";

/// Outcome banner shown after an operation, success or failure
#[derive(Clone)]
struct Status {
    success: bool,
    message: String,
}

impl Status {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    fn err(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

#[component]
pub fn WardScreen() -> impl IntoView {
    let wards = RwSignal::new(Vec::<Ward>::new());
    let form = RwSignal::new(RegistryForm::new());
    let status = RwSignal::new(None::<Status>);

    // One fetch on activation; failures surface as a banner and leave
    // the (empty) collection alone.
    spawn_local(async move {
        match crate::api::fetch_wards().await {
            Ok(data) => wards.set(data),
            Err(e) => {
                leptos::logging::warn!("Error fetching wards: {}", e);
                status.set(Some(Status::err("Failed to fetch wards")));
            }
        }
    });

    let on_create = move |_| {
        let payload = match form.with(|f| f.validate()) {
            Ok(payload) => payload,
            Err(e) => {
                status.set(Some(Status::err(e.message())));
                return;
            }
        };
        spawn_local(async move {
            match crate::api::create_ward(&payload).await {
                Ok(created) => {
                    wards.update(|w| w.push(created));
                    form.set(RegistryForm::default());
                    status.set(Some(Status::ok("Ward created successfully")));
                }
                Err(e) => {
                    leptos::logging::warn!("Error creating ward: {}", e);
                    status.set(Some(Status::err("Failed to create ward")));
                }
            }
        });
    };

    view! {
        <section>
            <h2>"Wards Management"</h2>

            {move || {
                status
                    .get()
                    .map(|s| {
                        let color = if s.success { "#155724" } else { "#721c24" };
                        view! { <p style=format!("color: {};", color)>{s.message}</p> }
                    })
            }}

            <input
                style=INPUT_STYLE
                placeholder="Ward Name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <input
                style=INPUT_STYLE
                placeholder="Ward Link (Optional)"
                prop:value=move || form.with(|f| f.link.clone())
                on:input=move |ev| form.update(|f| f.link = event_target_value(&ev))
            />

            <h3>"Select Facilities:"</h3>
            <div style="display: flex; gap: 0.5rem; flex-wrap: wrap;">
                {FacilityType::ALL
                    .into_iter()
                    .map(|ty| {
                        let style = move || {
                            let selected = form.with(|f| f.is_selected(ty));
                            format!(
                                "cursor: pointer; border: 1px solid {}; border-radius: 8px; \
                                 padding: 0.4rem 0.8rem; background: {};",
                                if selected { "#4CAF50" } else { "#ccc" },
                                if selected { "#d4edda" } else { "white" },
                            )
                        };
                        view! {
                            <button style=style on:click=move |_| form.update(|f| f.toggle_facility(ty))>
                                {ty.icon()} " " {ty.to_string()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {FacilityType::ALL
                .into_iter()
                .map(|ty| {
                    view! {
                        <Show when=move || form.with(|f| f.is_selected(ty))>
                            <div style="margin-top: 0.5rem;">
                                <input
                                    style=INPUT_STYLE
                                    placeholder=format!("Enter {} Name", ty)
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.update_facility_field(
                                                ty,
                                                FacilityField::Name,
                                                &event_target_value(&ev),
                                            )
                                        })
                                    }
                                />
                                <input
                                    style=INPUT_STYLE
                                    placeholder=format!("Enter {} Link", ty)
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.update_facility_field(
                                                ty,
                                                FacilityField::Link,
                                                &event_target_value(&ev),
                                            )
                                        })
                                    }
                                />
                            </div>
                        </Show>
                    }
                })
                .collect::<Vec<_>>()}

            <button
                style="margin-top: 0.75rem; background: #4CAF50; color: white; border: none; \
                       border-radius: 8px; padding: 0.6rem 1.2rem; cursor: pointer;"
                on:click=on_create
            >
                "Create Ward"
            </button>

            <div style="margin-top: 1.5rem;">
                {move || {
                    wards
                        .get()
                        .into_iter()
                        .map(|ward| {
                            let id = ward.id.clone();
                            let on_delete = move |_| {
                                let id = id.clone();
                                spawn_local(async move {
                                    match crate::api::delete_ward(&id).await {
                                        Ok(()) => {
                                            wards.update(|w| w.retain(|x| x.id != id));
                                            status.set(Some(Status::ok("Ward deleted successfully")));
                                        }
                                        Err(e) => {
                                            leptos::logging::warn!("Error deleting ward: {}", e);
                                            status.set(Some(Status::err("Failed to delete ward")));
                                        }
                                    }
                                });
                            };
                            view! {
                                <div style="display: flex; justify-content: space-between; \
                                            background: #f9f9f9; border-radius: 5px; \
                                            padding: 0.75rem; margin-bottom: 0.5rem;">
                                    <div>
                                        <p style="margin: 0; font-size: 1.1rem;">{ward.name.clone()}</p>
                                        {(!ward.link.is_empty())
                                            .then(|| {
                                                view! {
                                                    <a
                                                        href=ward.link.clone()
                                                        target="_blank"
                                                        rel="noreferrer"
                                                        style="color: blue;"
                                                    >
                                                        {ward.link.clone()}
                                                    </a>
                                                }
                                            })}
                                        {ward
                                            .facilities
                                            .iter()
                                            .map(|facility| {
                                                view! {
                                                    <div style="margin-top: 0.4rem;">
                                                        <FacilityBadge facility_type=facility.facility_type />
                                                        <span style="margin-left: 0.4rem;">
                                                            {facility.name.clone()}
                                                        </span>
                                                        {(!facility.link.is_empty())
                                                            .then(|| {
                                                                view! {
                                                                    <a
                                                                        href=facility.link.clone()
                                                                        target="_blank"
                                                                        rel="noreferrer"
                                                                        style="margin-left: 0.4rem; color: blue;"
                                                                    >
                                                                        {facility.link.clone()}
                                                                    </a>
                                                                }
                                                            })}
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <button
                                        style="background: #FF6347; color: white; border: none; \
                                               border-radius: 5px; padding: 0.4rem 0.8rem; \
                                               cursor: pointer; align-self: flex-start;"
                                        on:click=on_delete
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
