use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Assistant,
}

impl Role {
    pub fn css_class(self) -> &'static str {
        match self {
            Role::Human => "human",
            Role::Assistant => "assistant",
        }
    }
}

/// Certificate attached to an assistant reply, passed through as the backend sent it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDetail {
    pub cert_no: String,
    pub equipment_type: String,
    pub manufacturer: String,
    pub model: String,
    pub calibration_date: String,
    pub due_date: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub certificate: Option<CertificateDetail>,
}

impl ChatMessage {
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
            created_at: OffsetDateTime::now_utc(),
            certificate: None,
        }
    }

    pub fn assistant(content: impl Into<String>, certificate: Option<CertificateDetail>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            created_at: OffsetDateTime::now_utc(),
            certificate,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalConditions {
    #[serde(default)]
    pub avg_temperature: String,
    #[serde(default)]
    pub avg_humidity: String,
    #[serde(default)]
    pub avg_pressure: String,
}

/// Aggregate statistics shown in the sidebar. Replaced wholesale on every fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_certificates: u64,
    pub expiring_certificates: u64,
    pub accredited_certificates: u64,
    #[serde(default)]
    pub equipment_types: BTreeMap<String, u64>,
    #[serde(default)]
    pub environmental_conditions: EnvironmentalConditions,
}

impl DashboardSummary {
    /// Equipment types with the highest count first, ties broken by name.
    pub fn equipment_breakdown(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .equipment_types
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        rows
    }
}

#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub certificate: Option<CertificateDetail>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_summary_parses_backend_shape() {
        let body = r#"{
            "totalCertificates": 42,
            "expiringCertificates": 3,
            "accreditedCertificates": 40,
            "equipmentTypes": {"Thermometer": 10, "Balance": 12},
            "environmentalConditions": {
                "avgTemperature": "22.5C",
                "avgHumidity": "45%",
                "avgPressure": "1013hPa"
            }
        }"#;
        let summary: DashboardSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.total_certificates, 42);
        assert_eq!(summary.environmental_conditions.avg_pressure, "1013hPa");
        assert_eq!(
            summary.equipment_breakdown(),
            vec![("Balance", 12), ("Thermometer", 10)]
        );
    }

    #[test]
    fn chat_reply_certificate_is_optional() {
        let plain: ChatReply = serde_json::from_str(r#"{"response":"hi"}"#).unwrap();
        assert!(plain.certificate.is_none());

        let with_cert: ChatReply = serde_json::from_str(
            r#"{"response":"found","certificate":{"certNo":"C-1","equipmentType":"Gauge",
            "manufacturer":"Acme","model":"X2","calibrationDate":"2024-01-01","dueDate":"2025-01-01"}}"#,
        )
        .unwrap();
        assert_eq!(with_cert.certificate.unwrap().cert_no, "C-1");
    }

    #[test]
    fn theme_toggles_between_modes() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().label(), "Light");
    }
}
