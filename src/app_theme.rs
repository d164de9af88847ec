use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::user_settings::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.07, 0.09),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.35, 0.55, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.96, 0.96, 0.98),
                text: Color::from_rgb(0.12, 0.12, 0.14),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.145, 0.388, 0.922))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.145, 0.388, 0.922),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 8.0,
            },
            snap: false,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.231, 0.459, 0.969))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.231, 0.459, 0.969),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.145, 0.388, 0.922, 0.4),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 12.0,
            },
            snap: false,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.114, 0.306, 0.725))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.114, 0.306, 0.725),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

pub fn purple_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.435, 0.259, 0.757))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.435, 0.259, 0.757),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 8.0,
            },
            snap: false,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.541, 0.341, 0.847))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.541, 0.341, 0.847),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.435, 0.259, 0.757, 0.4),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 12.0,
            },
            snap: false,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.357, 0.208, 0.627))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.357, 0.208, 0.627),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            snap: false,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

pub fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.9, 0.3, 0.3))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(1.0, 0.4, 0.4),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 8.0,
            },
            snap: false,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(1.0, 0.4, 0.4))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(1.0, 0.5, 0.5),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.9, 0.3, 0.3, 0.4),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 12.0,
            },
            snap: false,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.8, 0.2, 0.2))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.9, 0.3, 0.3),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            snap: false,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: 2.0,
                radius: 10.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}
