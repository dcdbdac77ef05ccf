// Host-side tests for theme colour parsing and CSS output.

use folio_core::{ColorParseError, Hsl, Theme};

#[test]
fn parses_space_separated_token() {
    assert_eq!(Hsl::parse("210 40% 98%"), Ok(Hsl::new(210.0, 40.0, 98.0)));
    assert_eq!(
        "  222.2 84% 4.9% ".parse::<Hsl>(),
        Ok(Hsl::new(222.2, 84.0, 4.9))
    );
}

#[test]
fn parses_comma_separated_token() {
    assert_eq!(Hsl::parse("0, 0%, 100%"), Ok(Hsl::new(0.0, 0.0, 100.0)));
    assert_eq!(Hsl::parse("120deg 50 50"), Ok(Hsl::new(120.0, 50.0, 50.0)));
}

#[test]
fn rejects_malformed_tokens() {
    assert_eq!(
        Hsl::parse("210 40%"),
        Err(ColorParseError::ComponentCount {
            token: "210 40%".to_string(),
            found: 2,
        })
    );
    assert_eq!(
        Hsl::parse("blue 40% 98%"),
        Err(ColorParseError::InvalidComponent("blue".to_string()))
    );
    assert_eq!(
        Hsl::parse("210 140% 98%"),
        Err(ColorParseError::OutOfRange("210 140% 98%".to_string()))
    );
    assert!(Hsl::parse("").is_err());
}

#[test]
fn ink_renders_css_color_level_4() {
    let ink = Hsl::new(210.0, 40.0, 98.0).with_alpha(0.15);
    assert_eq!(ink.css(), "hsl(210 40% 98% / 0.15)");
    assert_eq!(
        Theme::LIGHT_FOREGROUND.with_alpha(0.05).css(),
        "hsl(222.2 84% 4.9% / 0.05)"
    );
}

#[test]
fn display_round_trips_through_parse() {
    let c = Theme::LIGHT_FOREGROUND;
    assert_eq!(Hsl::parse(&c.to_string()), Ok(c));
}

#[test]
fn theme_toggles_between_light_and_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::from_class(Theme::Light.class_name()), Some(Theme::Light));
    assert_eq!(Theme::from_class("sepia"), None);
}

#[test]
fn fallback_ink_contrasts_with_the_theme() {
    assert!(Theme::Dark.fallback_foreground().l > 90.0);
    assert!(Theme::Light.fallback_foreground().l < 10.0);
}

#[test]
fn theme_is_read_from_the_root_class_list() {
    assert_eq!(Theme::from_classes("scroll-smooth light".split_whitespace()), Theme::Light);
    assert_eq!(Theme::from_classes(["dark", "antialiased"]), Theme::Dark);
    // no theme class at all: the page default
    assert_eq!(Theme::from_classes("".split_whitespace()), Theme::Dark);
    assert_eq!(Theme::from_classes(["lightish"]), Theme::Dark);
}
