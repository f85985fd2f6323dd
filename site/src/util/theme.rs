//! Light/dark theme preference.
//!
//! Reads the preference from `localStorage` and marks the `<html>` element
//! with a `light`/`dark` class plus a `data-theme` attribute. Toggle writes
//! back to `localStorage`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op and render the default theme so server output stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Two-valued site theme. Dark unless the visitor picked otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value. Anything other than `"light"` or `"dark"`
    /// falls back to the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            Some("dark") => Self::Dark,
            _ => Self::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// French label used in the toggle tooltip.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Clair",
            Self::Dark => "Sombre",
        }
    }

    /// Background/foreground custom properties set alongside the class.
    pub fn palette(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("hsl(120 20% 98%)", "hsl(140 25% 12%)"),
            Self::Dark => ("hsl(140 30% 4%)", "hsl(120 15% 95%)"),
        }
    }
}

/// Read the theme preference from localStorage.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        Theme::parse(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply the theme class, `data-theme` attribute, and palette on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(theme.as_str());
        let _ = root.set_attribute("data-theme", theme.as_str());

        if let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() {
            let (background, foreground) = theme.palette();
            let style = html.style();
            let _ = style.set_property("--background", background);
            let _ = style.set_property("--foreground", foreground);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Write the preference to localStorage.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}
