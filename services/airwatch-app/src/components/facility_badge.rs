//! Facility badge component

use airwatch_model::FacilityType;
use leptos::prelude::*;

/// A small badge showing the glyph and label for a facility type
#[component]
pub fn FacilityBadge(facility_type: FacilityType) -> impl IntoView {
    let style = "display: inline-flex; align-items: center; gap: 0.3em; \
                 padding: 0.25em 0.6em; border-radius: 0.25rem; \
                 font-size: 0.85em; background-color: #e2e3e5;";

    view! {
        <span style=style>
            <span>{facility_type.icon()}</span>
            <span>{facility_type.to_string()}</span>
        </span>
    }
}
