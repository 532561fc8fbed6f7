use std::str::FromStr;

use serde::Serialize;

/// Visual theme applied to the preview by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    #[default]
    Modern,
    Minimal,
    Creative,
}

impl Template {
    pub fn display_name(&self) -> &'static str {
        match self {
            Template::Modern => "Modern Professional",
            Template::Minimal => "Minimal Clean",
            Template::Creative => "Creative Bold",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Template::Modern => "theme-modern",
            Template::Minimal => "theme-minimal",
            Template::Creative => "theme-creative",
        }
    }

    pub fn font_stack(&self) -> &'static str {
        match self {
            Template::Modern => "ui-sans-serif, system-ui, Segoe UI, Arial",
            Template::Minimal => "Arial, Helvetica, sans-serif",
            Template::Creative => "Helvetica, Arial, sans-serif",
        }
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(Template::Modern),
            "minimal" => Ok(Template::Minimal),
            "creative" => Ok(Template::Creative),
            other => Err(format!("unknown template '{other}'")),
        }
    }
}

/// Template metadata as sent to clients.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: Template,
    pub name: &'static str,
    pub class_name: &'static str,
    pub font_stack: &'static str,
}

impl From<Template> for TemplateInfo {
    fn from(t: Template) -> Self {
        Self {
            id: t,
            name: t.display_name(),
            class_name: t.class_name(),
            font_stack: t.font_stack(),
        }
    }
}
