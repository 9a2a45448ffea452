//! Tests for count rendering.

use segment_render::{Options, RenderUnit, gradient_level, render};

fn with_max(max: u32) -> Options {
    Options {
        max: Some(max),
        ..Options::default()
    }
}

#[test]
fn renders_nothing_for_zero_or_absent() {
    assert_eq!(render(Some(0), &Options::default()), None);
    assert_eq!(render(None, &Options::default()), None);
    assert_eq!(render(Some(0), &with_max(100)), None);
}

#[test]
fn renders_flat_highlight_without_max() {
    let units = render(Some(5), &Options::default()).expect("should render");

    assert_eq!(
        units,
        vec![RenderUnit {
            contents: "5".to_string(),
            highlight_groups: vec!["email_alert".to_string()],
            gradient_level: None,
        }]
    );
}

#[test]
fn prepends_before_text() {
    let options = Options {
        before: "MAIL ".to_string(),
        ..Options::default()
    };

    let units = render(Some(5), &options).expect("should render");

    assert_eq!(units[0].contents, "MAIL 5");
    assert_eq!(units[0].to_string(), "MAIL 5");
}

#[test]
fn renders_gradient_with_max() {
    let units = render(Some(50), &with_max(100)).expect("should render");

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].gradient_level, Some(50.0));
    assert_eq!(
        units[0].highlight_groups,
        vec![
            "email_alert_gradient".to_string(),
            "email_alert".to_string()
        ]
    );
}

#[test]
fn clamps_gradient_at_one_hundred() {
    let units = render(Some(150), &with_max(100)).expect("should render");

    assert_eq!(units[0].gradient_level, Some(100.0));
    assert_eq!(units[0].contents, "150");
}

#[test]
fn zero_max_falls_back_to_flat_highlight() {
    let units = render(Some(3), &with_max(0)).expect("should render");

    assert_eq!(units[0].gradient_level, None);
    assert_eq!(units[0].highlight_groups, vec!["email_alert".to_string()]);
}

#[test]
fn custom_highlight_groups_are_used() {
    let options = Options {
        max: Some(10),
        highlight_group: "work_mail".to_string(),
        highlight_group_gradient: "work_mail_gradient".to_string(),
        before: String::new(),
    };

    let units = render(Some(1), &options).expect("should render");

    assert_eq!(
        units[0].highlight_groups,
        vec!["work_mail_gradient".to_string(), "work_mail".to_string()]
    );
    assert_eq!(units[0].gradient_level, Some(10.0));
}

#[test]
fn gradient_level_is_proportional() {
    assert_eq!(gradient_level(1, 4), 25.0);
    assert_eq!(gradient_level(4, 4), 100.0);
    assert_eq!(gradient_level(9, 4), 100.0);
}
