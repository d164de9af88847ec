#[cfg(test)]
mod tests {
    use crate::app_theme::*;
    use crate::user_settings::ThemeMode;
    use iced::widget::button;
    use iced::{Background, Color, Theme};

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.07, 0.07, 0.09));
        assert_eq!(palette.text, Color::from_rgb(0.95, 0.95, 0.95));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.96, 0.96, 0.98));
        assert_eq!(palette.text, Color::from_rgb(0.12, 0.12, 0.14));
    }

    #[test]
    fn test_primary_button_style_active_has_blue_background() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.145, 0.388, 0.922));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_primary_button_style_hovered_is_lighter_blue() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Hovered);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.231, 0.459, 0.969));
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn test_primary_button_style_pressed_is_darker_blue() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Pressed);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.114, 0.306, 0.725));
        } else {
            panic!("Expected background color");
        }

        assert!(style.snap);
    }

    #[test]
    fn test_primary_button_style_disabled_is_gray() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Disabled);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.3, 0.3, 0.3));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_purple_button_style_active_has_purple_background() {
        let theme = Theme::Dark;
        let style = purple_button_style(&theme, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.435, 0.259, 0.757));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_danger_button_style_active_has_red_background() {
        let theme = Theme::Dark;
        let style = danger_button_style(&theme, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.9, 0.3, 0.3));
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn test_button_styles_have_consistent_border_radius() {
        let theme = Theme::Dark;

        let primary_active = primary_button_style(&theme, button::Status::Active);
        let purple_active = purple_button_style(&theme, button::Status::Active);
        let danger_active = danger_button_style(&theme, button::Status::Active);

        assert_eq!(primary_active.border.radius, 10.0.into());
        assert_eq!(purple_active.border.radius, 10.0.into());
        assert_eq!(danger_active.border.radius, 10.0.into());
    }

    #[test]
    fn test_button_hover_increases_shadow_blur() {
        let theme = Theme::Dark;

        let active_style = primary_button_style(&theme, button::Status::Active);
        let hover_style = primary_button_style(&theme, button::Status::Hovered);

        assert!(hover_style.shadow.blur_radius > active_style.shadow.blur_radius);
    }
}
