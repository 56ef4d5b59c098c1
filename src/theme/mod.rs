//! Theme customization: design tokens and table style overrides
//!
//! The theme is the outermost provider of the application shell. Handlers
//! and templates read colors from it instead of hardcoding them; the
//! stylesheet it renders is embedded by the page layout.

use crate::core::order::StatusColor;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Light or dark rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Palette entries; unset entries keep the built-in colors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub primary: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

/// Theme section of the configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub palette: PaletteConfig,
    /// Extra CSS custom properties, emitted in order on `:root`
    pub css_variables: IndexMap<String, String>,
}

/// Resolved semantic colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl Palette {
    fn from_config(config: &PaletteConfig) -> Self {
        let pick = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };
        Self {
            primary: pick(&config.primary, "#1677ff"),
            success: pick(&config.success, "#52c41a"),
            warning: pick(&config.warning, "#faad14"),
            error: pick(&config.error, "#ff4d4f"),
        }
    }

    /// Hex value for a status marker color
    pub fn color(&self, color: StatusColor) -> &str {
        match color {
            StatusColor::Primary => &self.primary,
            StatusColor::Success => &self.success,
            StatusColor::Warning => &self.warning,
            StatusColor::Error => &self.error,
        }
    }
}

/// Style overrides applied to the order table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridStyle {
    pub font_size_px: u32,
    pub header_background: &'static str,
    pub border_color: &'static str,
}

impl GridStyle {
    fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                font_size_px: 14,
                header_background: "#fafafa",
                border_color: "#f0f0f0",
            },
            ThemeMode::Dark => Self {
                font_size_px: 14,
                header_background: "#1d1d1d",
                border_color: "#303030",
            },
        }
    }
}

/// The resolved theme
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub grid: GridStyle,
    css_variables: IndexMap<String, String>,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            mode: config.mode,
            palette: Palette::from_config(&config.palette),
            grid: GridStyle::for_mode(config.mode),
            css_variables: config.css_variables.clone(),
        }
    }

    /// Page background and text colors for the current mode
    fn surface(&self) -> (&'static str, &'static str) {
        match self.mode {
            ThemeMode::Light => ("#fafafb", "#262626"),
            ThemeMode::Dark => ("#121212", "#f0f0f0"),
        }
    }

    /// Stylesheet embedded by the page layout
    pub fn stylesheet(&self) -> String {
        let (background, text) = self.surface();
        let mut css = String::new();

        css.push_str(":root {\n");
        let _ = writeln!(css, "  --color-primary: {};", self.palette.primary);
        let _ = writeln!(css, "  --color-success: {};", self.palette.success);
        let _ = writeln!(css, "  --color-warning: {};", self.palette.warning);
        let _ = writeln!(css, "  --color-error: {};", self.palette.error);
        let _ = writeln!(css, "  --color-background: {};", background);
        let _ = writeln!(css, "  --color-text: {};", text);
        let _ = writeln!(css, "  --grid-header-background: {};", self.grid.header_background);
        let _ = writeln!(css, "  --grid-border: {};", self.grid.border_color);
        for (name, value) in &self.css_variables {
            let name = name.trim_start_matches("--");
            let _ = writeln!(css, "  --{}: {};", name, value);
        }
        css.push_str("}\n");

        let _ = write!(
            css,
            concat!(
                ".order-grid {{ font-size: {}px; letter-spacing: normal; }}\n",
                ".order-grid thead th {{ background-color: var(--grid-header-background); }}\n",
                ".order-grid th, .order-grid td {{ border-right: 1px solid var(--grid-border); ",
                "border-bottom: 1px solid var(--grid-border); }}\n",
                ".order-grid .column-separator {{ display: none; }}\n",
            ),
            self.grid.font_size_px
        );

        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.palette.color(StatusColor::Warning), "#faad14");
        assert_eq!(theme.palette.color(StatusColor::Success), "#52c41a");
    }

    #[test]
    fn test_palette_override_keeps_other_colors() {
        let config = ThemeConfig {
            palette: PaletteConfig {
                primary: Some("#000000".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.palette.primary, "#000000");
        assert_eq!(theme.palette.error, "#ff4d4f");
    }

    #[test]
    fn test_grid_style_follows_mode() {
        let dark = Theme::from_config(&ThemeConfig {
            mode: ThemeMode::Dark,
            ..Default::default()
        });
        assert_eq!(dark.grid.header_background, "#1d1d1d");
        assert_eq!(dark.grid.border_color, "#303030");

        let light = Theme::default();
        assert_eq!(light.grid.header_background, "#fafafa");
        assert_eq!(light.grid.border_color, "#f0f0f0");
    }

    #[test]
    fn test_stylesheet_contains_tokens_and_variables_in_order() {
        let mut css_variables = IndexMap::new();
        css_variables.insert("--radius".to_string(), "4px".to_string());
        css_variables.insert("shadow".to_string(), "none".to_string());
        let theme = Theme::from_config(&ThemeConfig {
            css_variables,
            ..Default::default()
        });

        let css = theme.stylesheet();
        assert!(css.contains("--color-primary: #1677ff;"));
        assert!(css.contains("font-size: 14px"));
        let radius = css.find("--radius: 4px;").expect("radius variable");
        let shadow = css.find("--shadow: none;").expect("shadow variable");
        assert!(radius < shadow);
    }
}
