use serde::Serialize;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Script,
    Style,
}

impl AssetKind {
    pub const ALL: [Self; 2] = [Self::Script, Self::Style];
}

/// Static files shipped for each theme. A missing row means the theme has
/// no file of that kind (Noty carries its styles inside the script).
const THEME_ASSETS: &[(Theme, AssetKind, &str)] = &[
    (Theme::Growl, AssetKind::Script, "jquery.growl.js"),
    (Theme::Growl, AssetKind::Style, "jquery.growl.css"),
    (Theme::Noty, AssetKind::Script, "jquery.noty.packaged.min.js"),
];

/// Looks up the static file a theme needs for the given kind of asset.
///
/// Returns `None` when the theme ships no file of that kind.
pub fn resolve_asset(theme: Theme, kind: AssetKind) -> Option<&'static str> {
    THEME_ASSETS
        .iter()
        .find(|(t, k, _)| *t == theme && *k == kind)
        .map(|(_, _, filename)| *filename)
}

/// A script or stylesheet to be linked from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetReference {
    pub kind: AssetKind,
    pub url: String,
    /// Name of the asset group that must be loaded before this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends: Option<&'static str>,
}

/// The shared group of files every theme depends on.
///
/// Its script defines the client-side `Notifications` function, so it has
/// to be on the page before the theme files and the init call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBundle {
    base_url: String,
}

impl AssetBundle {
    pub const NAME: &'static str = "notifications";
    const SCRIPTS: &'static [&'static str] = &["notifications.js"];

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public URL of a file published under this group's base URL.
    pub fn url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), filename)
    }

    /// References to the group's own files.
    pub fn references(&self) -> Vec<AssetReference> {
        Self::SCRIPTS
            .iter()
            .map(|filename| AssetReference {
                kind: AssetKind::Script,
                url: self.url(filename),
                depends: None,
            })
            .collect()
    }

    /// Reference to a theme file, marked as depending on this group.
    pub fn dependent(&self, kind: AssetKind, filename: &str) -> AssetReference {
        AssetReference {
            kind,
            url: self.url(filename),
            depends: Some(Self::NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_asset_table() {
        let cases = [
            (Theme::Growl, AssetKind::Script, Some("jquery.growl.js")),
            (Theme::Growl, AssetKind::Style, Some("jquery.growl.css")),
            (
                Theme::Noty,
                AssetKind::Script,
                Some("jquery.noty.packaged.min.js"),
            ),
            (Theme::Noty, AssetKind::Style, None),
        ];

        for (theme, kind, expected) in cases {
            assert_eq!(
                resolve_asset(theme, kind),
                expected,
                "{theme} / {kind:?}"
            );
        }
    }

    #[test]
    fn test_every_theme_has_a_script() {
        for theme in Theme::ALL {
            assert!(resolve_asset(theme, AssetKind::Script).is_some());
        }
    }

    #[test]
    fn test_bundle_url_joins_base_url() {
        let bundle = AssetBundle::new("/assets/notifications/");
        assert_eq!(
            bundle.url("notifications.js"),
            "/assets/notifications/notifications.js"
        );

        let bundle = AssetBundle::new("https://cdn.example.com/n");
        assert_eq!(
            bundle.url("jquery.growl.css"),
            "https://cdn.example.com/n/jquery.growl.css"
        );
    }

    #[test]
    fn test_dependent_reference_is_marked() {
        let bundle = AssetBundle::new("/assets");
        let reference = bundle.dependent(AssetKind::Style, "jquery.growl.css");

        assert_eq!(reference.depends, Some(AssetBundle::NAME));
        assert_eq!(reference.url, "/assets/jquery.growl.css");
        assert!(bundle.references().iter().all(|r| r.depends.is_none()));
    }
}
