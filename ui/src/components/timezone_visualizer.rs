use dioxus::prelude::*;

use minds_common::mock;
use minds_common::timezone::{HourClassification, OverlapWindow, Timezone};

fn cell_class(class: HourClassification) -> &'static str {
    match class {
        HourClassification::Overlap => "hour-cell overlap",
        HourClassification::Awake => "hour-cell awake",
        HourClassification::Asleep => "hour-cell asleep",
    }
}

/// The overlap finder: one strip of 24 UTC hours per participant city.
#[component]
pub fn TimezoneVisualizer() -> Element {
    let window = OverlapWindow::DEFAULT;
    let zones = mock::timezones();
    let window_hours = window.hours().count();

    rsx! {
        div { class: "overlap-finder",
            h3 { "The Overlap Finder (Find Synchronous Time)" }
            div { class: "overlap-rows",
                for tz in zones.iter() {
                    OverlapRow { key: "{tz.city}", timezone: tz.clone(), window }
                }
            }
            div { class: "overlap-caption", "✓ Optimal Meeting Window: {window} ({window_hours}h)" }
        }
    }
}

#[component]
fn OverlapRow(timezone: Timezone, window: OverlapWindow) -> Element {
    let cells = timezone.day_row(&window);

    rsx! {
        div { class: "overlap-row",
            span { class: "overlap-city", "{timezone.city}" }
            div { class: "overlap-cells",
                for cell in cells.iter() {
                    {
                        let class = cell_class(cell.classification());
                        let title = format!("{}:00", cell.local_hour);
                        let utc = cell.utc_hour.get();
                        rsx! {
                            div { key: "{utc}", class: "{class}", title: "{title}" }
                        }
                    }
                }
            }
        }
    }
}
