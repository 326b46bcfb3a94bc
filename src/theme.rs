use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub root_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            root_class: "app-shell light",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            root_class: "app-shell dark",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #fff7ed;
    --color-bg-panel: #ffffff;
    --color-bg-header: linear-gradient(90deg, #fb923c, #f97316);
    --color-text-primary: #1f2937;
    --color-text-muted: #4b5563;
    --color-accent: #ea580c;
    --color-accent-soft: #f97316;
    --color-card-bg: linear-gradient(135deg, #ffedd5, #fed7aa);
    --color-skeleton: #e5e7eb;
    --color-input-bg: #ffffff;
    --color-input-border: #fdba74;
    --color-chat-human-bg: linear-gradient(90deg, #f97316, #ea580c);
    --color-chat-human-text: #ffffff;
    --color-chat-assistant-bg: #ffffff;
    --color-chat-assistant-text: #1f2937;
    --color-certificate-bg: #ffedd5;
    --color-certificate-title: #9a3412;
    --color-timestamp: #6b7280;
    --color-alert-bg: #fee2e2;
    --color-alert-border: #ef4444;
    --color-alert-text: #b91c1c;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.toggle-btn { background: #ffffff; color: var(--color-accent-soft); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #111827;
    --color-bg-panel: #1f2937;
    --color-bg-header: #1f2937;
    --color-text-primary: #ffffff;
    --color-text-muted: #d1d5db;
    --color-accent: #fb923c;
    --color-accent-soft: #ea580c;
    --color-card-bg: linear-gradient(135deg, #374151, #4b5563);
    --color-skeleton: #374151;
    --color-input-bg: #1f2937;
    --color-input-border: #4b5563;
    --color-chat-human-bg: #c2410c;
    --color-chat-human-text: #ffffff;
    --color-chat-assistant-bg: #374151;
    --color-chat-assistant-text: #ffffff;
    --color-certificate-bg: #4b5563;
    --color-certificate-title: #fdba74;
    --color-timestamp: #9ca3af;
    --color-alert-bg: #450a0a;
    --color-alert-border: #ef4444;
    --color-alert-text: #fecaca;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.toggle-btn { background: #374151; color: #ffffff; }
"#;
