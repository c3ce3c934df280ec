/// Live viewer page
///
/// Controls, the frame (as an image or mirrored on a canvas), the overlay
/// status line and the statistics panel.
use iced::widget::{button, canvas, column, container, image, row, text, Space};
use iced::{Alignment, ContentFit, Element, Font, Length, Size};

use super::canvas::FrameCanvas;
use super::{muted, section_label};
use crate::frame::LoadedFrame;
use crate::state::viewer::{ViewMode, ViewerState};
use crate::Message;

const FRAME_HEIGHT: f32 = 420.0;

pub fn view<'a>(viewer: &'a ViewerState, frame: Option<&'a LoadedFrame>) -> Element<'a, Message> {
    let timer_button = if viewer.is_running() {
        button("Stop").on_press(Message::StopTimer).style(button::danger)
    } else {
        button("Start").on_press(Message::StartTimer).style(button::success)
    };

    let controls = row![
        button(viewer.load_button_label())
            .on_press_maybe(viewer.can_load().then_some(Message::LoadSampleFrame))
            .padding(10),
        button("Open Frame...")
            .on_press_maybe(viewer.can_load().then_some(Message::OpenCustomFrame))
            .style(button::secondary)
            .padding(10),
        button(viewer.toggle_button_label())
            .on_press(Message::ToggleView)
            .style(button::secondary)
            .padding(10),
        Space::with_width(Length::Fill),
        timer_button.padding(10),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let frame_area: Element<'a, Message> = match viewer.mode() {
        ViewMode::Image => match frame {
            Some(frame) => image(frame.handle.clone())
                .width(Length::Fill)
                .height(FRAME_HEIGHT)
                .content_fit(ContentFit::Contain)
                .into(),
            None => container(text("No frame loaded").style(muted))
                .center_x(Length::Fill)
                .center_y(FRAME_HEIGHT)
                .into(),
        },
        ViewMode::Canvas => canvas(FrameCanvas {
            frame: frame.map(|f| {
                (
                    f.handle.clone(),
                    Size::new(f.width as f32, f.height as f32),
                )
            }),
            overlay_alpha: viewer.overlay_alpha(),
        })
        .width(Length::Fill)
        .height(FRAME_HEIGHT)
        .into(),
    };

    let overlay = text(viewer.overlay_text())
        .size(14)
        .font(Font::MONOSPACE)
        .style(muted);

    column![
        text("Live Frame Viewer").size(28).font(Font::MONOSPACE),
        controls,
        container(frame_area)
            .padding(8)
            .width(Length::Fill)
            .style(container::bordered_box),
        overlay,
        stats_panel(viewer),
    ]
    .spacing(20)
    .padding(32)
    .into()
}

fn stats_panel(viewer: &ViewerState) -> Element<'_, Message> {
    let stats = viewer.displayed();
    let highlighted = viewer.is_highlighted();

    let entry = |label: &'static str, value: String| {
        let value = text(value).size(20).font(Font::MONOSPACE);
        let value = if highlighted {
            value.style(text::success)
        } else {
            value.style(text::primary)
        };
        column![section_label(label), value]
            .spacing(4)
            .width(Length::FillPortion(1))
    };

    container(
        row![
            entry("FPS", stats.fps_label()),
            entry("Resolution", stats.resolution.clone()),
            entry("Processing Time", stats.processing_time_label()),
            entry("Frame Count", stats.frame_count_label()),
        ]
        .spacing(24),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
