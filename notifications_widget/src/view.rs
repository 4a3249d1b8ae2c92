use std::fmt::Write;

use crate::asset::{AssetKind, AssetReference};
use crate::escape::html_encode;

/// Output buffer of a page render.
///
/// Collects stylesheets, script files and inline scripts registered while
/// the page is built, then renders them as markup: stylesheets go in the
/// head, script files and inline scripts go at the end of the body, files
/// first so inline code can call into them. Registering the same file twice
/// links it once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageView {
    css_files: Vec<String>,
    js_files: Vec<String>,
    js: Vec<String>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_asset(&mut self, asset: &AssetReference) {
        match asset.kind {
            AssetKind::Script => self.register_js_file(&asset.url),
            AssetKind::Style => self.register_css_file(&asset.url),
        }
    }

    pub fn register_css_file(&mut self, url: &str) {
        if !self.css_files.iter().any(|u| u == url) {
            self.css_files.push(url.to_string());
        }
    }

    pub fn register_js_file(&mut self, url: &str) {
        if !self.js_files.iter().any(|u| u == url) {
            self.js_files.push(url.to_string());
        }
    }

    pub fn register_js(&mut self, script: impl Into<String>) {
        self.js.push(script.into());
    }

    pub fn css_files(&self) -> &[String] {
        &self.css_files
    }

    pub fn js_files(&self) -> &[String] {
        &self.js_files
    }

    pub fn js(&self) -> &[String] {
        &self.js
    }

    pub fn is_empty(&self) -> bool {
        self.css_files.is_empty() && self.js_files.is_empty() && self.js.is_empty()
    }

    /// Markup for the end of `<head>`.
    pub fn head(&self) -> String {
        let mut html = String::new();
        for url in &self.css_files {
            let _ = writeln!(
                html,
                r#"<link href="{}" rel="stylesheet">"#,
                html_encode(url)
            );
        }
        html
    }

    /// Markup for the end of `<body>`.
    pub fn body_end(&self) -> String {
        let mut html = String::new();
        for url in &self.js_files {
            let _ =
                writeln!(html, r#"<script src="{}"></script>"#, html_encode(url));
        }
        for script in &self.js {
            let _ = writeln!(html, "<script>{script}</script>");
        }
        html
    }
}
