use std::collections::HashMap;

/// Read access to CSS custom properties on the document root.
pub trait StyleSource {
    fn custom_property(&self, name: &str) -> Option<String>;
}

impl StyleSource for HashMap<String, String> {
    fn custom_property(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// `getComputedStyle(document.documentElement)`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputedStyle;

#[cfg(target_arch = "wasm32")]
impl StyleSource for ComputedStyle {
    fn custom_property(&self, name: &str) -> Option<String> {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        window
            .get_computed_style(&root)
            .ok()
            .flatten()?
            .get_property_value(name)
            .ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub dark: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
    pub gray: String,
}

impl ChartColors {
    /// Resolve every color from `source`; unset or blank properties use the theme fallback.
    pub fn resolve<S: StyleSource + ?Sized>(source: &S) -> Self {
        let pick = |name: &str, fallback: &str| {
            source
                .custom_property(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            primary: pick("--color-primary", "#081f37"),
            secondary: pick("--color-secondary", "#5fc9f3"),
            accent: pick("--color-accent", "#2e79ba"),
            dark: pick("--color-dark", "#1e549f"),
            success: pick("--color-success", "#28a745"),
            warning: pick("--color-warning", "#ffc107"),
            danger: pick("--color-danger", "#dc3545"),
            info: pick("--color-info", "#17a2b8"),
            gray: pick("--color-gray-600", "#6c757d"),
        }
    }

    pub fn fallback() -> Self {
        Self::resolve(&HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_properties_use_fallbacks() {
        let colors = ChartColors::fallback();
        assert_eq!(colors.primary, "#081f37");
        assert_eq!(colors.secondary, "#5fc9f3");
        assert_eq!(colors.gray, "#6c757d");
    }

    #[test]
    fn set_properties_are_trimmed() {
        let mut styles = HashMap::new();
        styles.insert("--color-accent".to_string(), "  #123456 ".to_string());
        let colors = ChartColors::resolve(&styles);
        assert_eq!(colors.accent, "#123456");
        assert_eq!(colors.primary, "#081f37");
    }

    #[test]
    fn blank_property_counts_as_unset() {
        let mut styles = HashMap::new();
        styles.insert("--color-danger".to_string(), "   ".to_string());
        assert_eq!(ChartColors::resolve(&styles).danger, "#dc3545");
    }
}
