use notifications_widget::{
    AssetKind, PageView, RenderError, Theme, WidgetConfig,
    WidgetConfigBuilder, resolve_asset,
};
use serde_json::{Value, json};

fn growl_config() -> WidgetConfig {
    WidgetConfig {
        theme: "growl".to_string(),
        delay: 5000,
        timeout: 2000,
        seen: false,
        counters: Some(vec![".notifications-count".to_string()]),
        ..WidgetConfig::default()
    }
}

#[test]
fn test_growl_script_block() {
    let builder = WidgetConfigBuilder::new(
        "/notifications/notifications/poll",
        "/assets/notifications",
    );

    let rendered = builder.render(&growl_config()).unwrap();

    assert_eq!(
        rendered.script,
        r#"Notifications({"url":"/notifications/notifications/poll","theme":"growl","timeout":2000,"delay":5000,"options":{},"seen":false,"counters":[".notifications-count"]});"#
    );
}

#[test]
fn test_unknown_theme_emits_no_markup() {
    let builder = WidgetConfigBuilder::default();
    let config = WidgetConfig {
        theme: "unknown".to_string(),
        ..WidgetConfig::default()
    };
    let mut view = PageView::new();

    let result = builder.render_into(&config, &mut view);

    match result {
        Err(RenderError::UnsupportedTheme(err)) => {
            assert_eq!(err.theme(), "unknown");
        }
        other => panic!("expected unsupported theme, got {other:?}"),
    }
    assert_eq!(view.head(), "");
    assert_eq!(view.body_end(), "");
}

#[test]
fn test_all_invalid_themes_are_rejected() {
    let builder = WidgetConfigBuilder::default();

    for theme in ["", "GROWL", "Noty", "growl\n", "jgrowl", "<script>"] {
        let config = WidgetConfig {
            theme: theme.to_string(),
            ..growl_config()
        };
        let err = builder.render(&config).unwrap_err();
        assert_eq!(err.to_string(), format!("Unknown theme: {theme}"));
    }
}

#[test]
fn test_asset_table_covers_every_pair() {
    let mut resolved = Vec::new();
    for theme in Theme::ALL {
        for kind in AssetKind::ALL {
            resolved.push((theme, kind, resolve_asset(theme, kind)));
        }
    }

    assert_eq!(
        resolved,
        vec![
            (Theme::Growl, AssetKind::Script, Some("jquery.growl.js")),
            (Theme::Growl, AssetKind::Style, Some("jquery.growl.css")),
            (
                Theme::Noty,
                AssetKind::Script,
                Some("jquery.noty.packaged.min.js")
            ),
            (Theme::Noty, AssetKind::Style, None),
        ]
    );
}

#[test]
fn test_render_is_deterministic() {
    let builder = WidgetConfigBuilder::default();
    let mut config = growl_config();
    config.client_options.insert("size".to_string(), json!("large"));
    config
        .client_options
        .insert("location".to_string(), json!("br"));

    let first = builder.render(&config).unwrap();
    let second = builder.render(&config).unwrap();

    assert_eq!(first, second);
    assert!(first.script.contains(r#""options":{"size":"large","location":"br"}"#));
}

#[test]
fn test_payload_round_trip() {
    let builder = WidgetConfigBuilder::default();
    let mut config = WidgetConfig {
        theme: "noty".to_string(),
        delay: 10_000,
        timeout: 500,
        seen: true,
        counters: Some(vec!["#count".to_string(), ".badge".to_string()]),
        ..WidgetConfig::default()
    };
    config.client_options.insert(
        "layout".to_string(),
        json!({ "name": "topRight", "max": 5, "modal": false }),
    );

    let encoded = builder
        .build_payload(&config, Theme::Noty)
        .encode()
        .unwrap();
    let decoded: Value = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded["theme"], json!("noty"));
    assert_eq!(decoded["delay"], json!(10_000));
    assert_eq!(decoded["timeout"], json!(500));
    assert_eq!(decoded["seen"], json!(true));
    assert_eq!(decoded["counters"], json!(["#count", ".badge"]));
    assert_eq!(
        decoded["options"],
        json!({ "layout": { "name": "topRight", "max": 5, "modal": false } })
    );
}

#[test]
fn test_full_page_markup() {
    let builder = WidgetConfigBuilder::default();
    let mut view = PageView::new();

    builder.render_into(&growl_config(), &mut view).unwrap();

    assert_eq!(
        view.head(),
        "<link href=\"/assets/notifications/jquery.growl.css\" rel=\"stylesheet\">\n"
    );
    let body = view.body_end();
    let lines: Vec<_> = body.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        r#"<script src="/assets/notifications/notifications.js"></script>"#
    );
    assert_eq!(
        lines[1],
        r#"<script src="/assets/notifications/jquery.growl.js"></script>"#
    );
    assert!(lines[2].starts_with("<script>Notifications({"));
    assert!(lines[2].ends_with("});</script>"));
}

#[test]
fn test_two_widgets_share_asset_links() {
    let builder = WidgetConfigBuilder::default();
    let mut view = PageView::new();

    builder.render_into(&growl_config(), &mut view).unwrap();
    builder.render_into(&growl_config(), &mut view).unwrap();

    assert_eq!(view.js_files().len(), 2);
    assert_eq!(view.css_files().len(), 1);
    assert_eq!(view.js().len(), 2);
}
