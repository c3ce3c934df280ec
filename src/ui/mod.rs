/// User interface module
///
/// Views are plain functions from state to `Element`:
/// - gallery.rs - showcase cards
/// - viewer.rs - live viewer page
/// - canvas.rs - canvas program mirroring the viewer frame
/// - theme.rs - palettes

pub mod canvas;
pub mod gallery;
pub mod theme;
pub mod viewer;

use iced::widget::{button, column, container, row, text, Space, Text};
use iced::{Alignment, Element, Font, Length, Theme};

use crate::config::Page;
use crate::state::preferences::ThemePreference;
use crate::Message;

/// Secondary text color
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}

/// Small uppercase caption above a value
pub fn section_label(label: &str) -> Text<'static> {
    text(label.to_uppercase())
        .size(12)
        .font(Font::MONOSPACE)
        .style(muted)
}

/// Title bar with page tabs and the theme toggle
pub fn header<'a>(page: Page, theme: ThemePreference) -> Element<'a, Message> {
    let tab = |label: &'static str, target: Page| {
        button(text(label).font(Font::MONOSPACE))
            .on_press(Message::SelectPage(target))
            .style(if page == target {
                button::primary
            } else {
                button::text
            })
            .padding([6, 14])
    };

    let title = column![
        text("CANNY EDGE DETECTION")
            .size(32)
            .font(Font::MONOSPACE)
            .style(text::primary),
        text("Video processing showcase")
            .size(14)
            .font(Font::MONOSPACE)
            .style(muted),
    ]
    .spacing(4);

    container(
        row![
            title,
            Space::with_width(Length::Fill),
            tab("Gallery", Page::Gallery),
            tab("Live Viewer", Page::Viewer),
            button(text(theme.toggle_label()).font(Font::MONOSPACE))
                .on_press(Message::ToggleTheme)
                .style(button::secondary)
                .padding([6, 14]),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([24, 32])
    .width(Length::Fill)
    .into()
}
