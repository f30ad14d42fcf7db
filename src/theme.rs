//! VHS theme tables matching the doc site color palette.
//!
//! The two tables mirror the CSS variables of the documentation site's
//! light/dark modes so recorded demos blend into either. Each theme is a
//! closed set of 20 color roles: the 16 ANSI slots plus background,
//! foreground, cursor and selection. Both tables are process-wide constants.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// A terminal color theme for the recorder. Serializes to camelCase JSON in
/// field declaration order, which is the order VHS documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub black: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub blue: &'static str,
    pub magenta: &'static str,
    pub cyan: &'static str,
    pub white: &'static str,
    pub bright_black: &'static str,
    pub bright_red: &'static str,
    pub bright_green: &'static str,
    pub bright_yellow: &'static str,
    pub bright_blue: &'static str,
    pub bright_magenta: &'static str,
    pub bright_cyan: &'static str,
    pub bright_white: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub cursor: &'static str,
    pub selection: &'static str,
}

impl Theme {
    /// All 20 (role, value) pairs in serialization order.
    pub fn entries(&self) -> [(&'static str, &'static str); 20] {
        [
            ("black", self.black),
            ("red", self.red),
            ("green", self.green),
            ("yellow", self.yellow),
            ("blue", self.blue),
            ("magenta", self.magenta),
            ("cyan", self.cyan),
            ("white", self.white),
            ("brightBlack", self.bright_black),
            ("brightRed", self.bright_red),
            ("brightGreen", self.bright_green),
            ("brightYellow", self.bright_yellow),
            ("brightBlue", self.bright_blue),
            ("brightMagenta", self.bright_magenta),
            ("brightCyan", self.bright_cyan),
            ("brightWhite", self.bright_white),
            ("background", self.background),
            ("foreground", self.foreground),
            ("cursor", self.cursor),
            ("selection", self.selection),
        ]
    }
}

/// "Warm Gold Light" palette, aligned with the doc site light mode.
pub static LIGHT: Theme = Theme {
    black: "#8c959f",
    red: "#d73a49",
    green: "#22863a",
    yellow: "#d29922",
    blue: "#0969da",
    magenta: "#8250df",
    cyan: "#1b7c83",
    white: "#8c959f",
    bright_black: "#8c959f",
    bright_red: "#cb2431",
    bright_green: "#2ea043",
    bright_yellow: "#f2cc60",
    bright_blue: "#218bff",
    bright_magenta: "#a475f9",
    bright_cyan: "#39c5cf",
    bright_white: "#8c959f",
    background: "#FFFBF0",
    foreground: "#1f2328",
    cursor: "#d97706",
    selection: "#FFF0C8",
};

/// "Warm Workbench Dark" palette, derived from the doc site's dark-mode
/// custom properties (bg #1c1b1a, text #e8e6e3, accent #f59e0b).
pub static DARK: Theme = Theme {
    black: "#6b7280",
    red: "#f87171",
    green: "#4ade80",
    yellow: "#fbbf24",
    blue: "#60a5fa",
    magenta: "#c084fc",
    cyan: "#67d4d4",
    white: "#a8a29e",
    bright_black: "#6b7280",
    bright_red: "#fca5a5",
    bright_green: "#86efac",
    bright_yellow: "#fde047",
    bright_blue: "#93c5fd",
    bright_magenta: "#d8b4fe",
    bright_cyan: "#a5f3fc",
    bright_white: "#e8e6e3",
    background: "#1c1b1a",
    foreground: "#e8e6e3",
    cursor: "#f59e0b",
    selection: "#422006",
};

/// Name-keyed lookup for CLI/script selection.
pub static THEMES: Lazy<BTreeMap<&'static str, &'static Theme>> = Lazy::new(|| {
    let mut m = BTreeMap::new();
    m.insert("light", &LIGHT);
    m.insert("dark", &DARK);
    m
});

/// Format a theme as the value of a VHS `Set Theme` directive (compact JSON).
pub fn format_theme_for_vhs(theme: &Theme) -> String {
    // A struct of plain string fields cannot fail to serialize.
    serde_json::to_string(theme).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_both_tables_share_the_same_20_keys() {
        let light_keys: Vec<&str> = LIGHT.entries().iter().map(|(k, _)| *k).collect();
        let dark_keys: Vec<&str> = DARK.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(light_keys.len(), 20);
        assert_eq!(light_keys, dark_keys);
    }

    #[test]
    fn test_all_values_are_hex_colors() {
        for theme in [&LIGHT, &DARK] {
            for (role, value) in theme.entries() {
                assert!(is_hex_color(value), "{role} has non-hex value {value}");
            }
        }
    }

    #[test]
    fn test_themes_table_has_light_and_dark() {
        assert_eq!(THEMES.get("light"), Some(&&LIGHT));
        assert_eq!(THEMES.get("dark"), Some(&&DARK));
        assert_eq!(THEMES.len(), 2);
    }

    #[test]
    fn test_vhs_format_round_trips_as_json() {
        let json = format_theme_for_vhs(&LIGHT);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let obj = parsed.as_object().expect("json object");
        assert_eq!(obj.len(), 20);
        for (role, value) in LIGHT.entries() {
            assert_eq!(
                obj.get(role).and_then(|v| v.as_str()),
                Some(value),
                "role {role} did not round-trip"
            );
        }
    }

    #[test]
    fn test_serialization_preserves_declaration_order() {
        let json = format_theme_for_vhs(&DARK);
        let black = json.find("\"black\"").expect("black present");
        let bright = json.find("\"brightBlack\"").expect("brightBlack present");
        let selection = json.find("\"selection\"").expect("selection present");
        assert!(black < bright && bright < selection);
    }
}
