use crate::state::{AssistantState, DashboardStatus};
use crate::types::DashboardSummary;
use dioxus::prelude::*;

pub const SKELETON_CARDS: usize = 3;

/// `(label, value)` rows of the certificates overview card.
pub fn overview_rows(summary: &DashboardSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Total Certificates", summary.total_certificates.to_string()),
        ("Expiring Soon", summary.expiring_certificates.to_string()),
        ("Accredited", summary.accredited_certificates.to_string()),
    ]
}

pub fn equipment_rows(summary: &DashboardSummary) -> Vec<(String, String)> {
    summary
        .equipment_breakdown()
        .into_iter()
        .map(|(name, count)| (name.to_string(), count.to_string()))
        .collect()
}

pub fn environment_rows(summary: &DashboardSummary) -> Vec<(&'static str, String)> {
    let conditions = &summary.environmental_conditions;
    vec![
        ("Temperature", conditions.avg_temperature.clone()),
        ("Humidity", conditions.avg_humidity.clone()),
        ("Pressure", conditions.avg_pressure.clone()),
    ]
}

#[component]
pub fn DashboardPanel(state: Signal<AssistantState>) -> Element {
    let status = state.read().dashboard().clone();
    let open = state.read().sidebar_open();

    let body = match status {
        DashboardStatus::Idle | DashboardStatus::Loading => rsx! {
            for i in 0..SKELETON_CARDS {
                div { key: "{i}", class: "skeleton-card" }
            }
        },
        DashboardStatus::Failed(message) => rsx! {
            div { class: "inline-alert", role: "alert",
                p { class: "alert-title", "Error" }
                p { "{message}" }
            }
        },
        DashboardStatus::Ready(summary) => rsx! {
            DashboardCard { title: "Certificates Overview", icon: "📄",
                for (label, value) in overview_rows(&summary) {
                    StatRow { key: "{label}", label: label.to_string(), value }
                }
            }
            DashboardCard { title: "Equipment Types", icon: "⚙",
                for (label, value) in equipment_rows(&summary) {
                    StatRow { key: "{label}", label: label.clone(), value }
                }
            }
            DashboardCard { title: "Avg. Environmental Conditions", icon: "🌡",
                for (label, value) in environment_rows(&summary) {
                    StatRow { key: "{label}", label: label.to_string(), value }
                }
            }
        },
    };

    rsx! {
        aside {
            class: format_args!("sidebar {}", if open { "open" } else { "closed" }),
            aria_hidden: (!open).to_string(),
            div { class: "sidebar-inner",
                h2 { class: "sidebar-title", "Calibration Dashboard" }
                {body}
            }
        }
    }
}

#[component]
fn DashboardCard(title: &'static str, icon: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "dashboard-card",
            h3 { class: "card-title",
                span { class: "card-icon", aria_hidden: "true", "{icon}" }
                span { "{title}" }
            }
            div { class: "card-rows", {children} }
        }
    }
}

#[component]
fn StatRow(label: String, value: String) -> Element {
    rsx! {
        div { class: "stat-row",
            span { class: "stat-label", "{label}:" }
            span { class: "stat-value", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EnvironmentalConditions;
    use std::collections::BTreeMap;

    fn sample() -> DashboardSummary {
        DashboardSummary {
            total_certificates: 42,
            expiring_certificates: 3,
            accredited_certificates: 40,
            equipment_types: BTreeMap::from([("Thermometer".to_string(), 10)]),
            environmental_conditions: EnvironmentalConditions {
                avg_temperature: "22.5C".to_string(),
                avg_humidity: "45%".to_string(),
                avg_pressure: "1013hPa".to_string(),
            },
        }
    }

    #[test]
    fn overview_shows_the_three_counts() {
        let values: Vec<String> = overview_rows(&sample()).into_iter().map(|r| r.1).collect();
        assert_eq!(values, vec!["42", "3", "40"]);
    }

    #[test]
    fn equipment_rows_render_as_type_and_count() {
        let rows = equipment_rows(&sample());
        let rendered: Vec<String> = rows
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect();
        assert_eq!(rendered, vec!["Thermometer: 10"]);
    }

    #[test]
    fn environment_values_are_verbatim() {
        let values: Vec<String> = environment_rows(&sample()).into_iter().map(|r| r.1).collect();
        assert_eq!(values, vec!["22.5C", "45%", "1013hPa"]);
    }
}
