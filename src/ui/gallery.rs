/// Gallery page: one card per showcase record
use iced::widget::{column, container, horizontal_rule, image, row, scrollable, text, Column};
use iced::{ContentFit, Element, Font, Length};
use iced_aw::Wrap;

use super::{muted, section_label};
use crate::state::gallery::{Card, Parameter};
use crate::Message;

const IMAGE_HEIGHT: f32 = 240.0;

pub fn view(cards: &[Card]) -> Element<'_, Message> {
    let intro = column![
        text("Video Edge Detection Showcase").size(28).font(Font::MONOSPACE),
        text(
            "Showcasing Canny edge detection applied to various images with tuned parameters. \
             Each result displays the original image alongside its processed counterpart \
             with the parameters used to produce it."
        )
        .size(15)
        .style(muted),
    ]
    .spacing(12);

    let cards = cards
        .iter()
        .fold(Column::new().spacing(40), |col, card| col.push(card_view(card)));

    let footer = text("Built with Rust + iced • Canny Edge Detection Image Portfolio")
        .size(12)
        .font(Font::MONOSPACE)
        .style(muted);

    scrollable(
        column![intro, cards, horizontal_rule(1), footer]
            .spacing(40)
            .padding(32),
    )
    .height(Length::Fill)
    .into()
}

fn card_view(card: &Card) -> Element<'_, Message> {
    let heading = text(&card.title)
        .size(20)
        .font(Font::MONOSPACE)
        .style(text::primary);

    let images = row![
        image_panel("ORIGINAL VIDEO", &card.original),
        image_panel("EDGE DETECTED", &card.processed),
    ]
    .spacing(24);

    let parameters = Wrap::with_elements(card.parameters.iter().map(parameter_view).collect())
        .spacing(48.0)
        .line_spacing(12.0);

    container(
        column![heading, images, horizontal_rule(1), parameters]
            .spacing(20),
    )
    .padding(24)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

fn image_panel<'a>(label: &'static str, path: &std::path::Path) -> Element<'a, Message> {
    column![
        section_label(label),
        image(path.to_path_buf())
            .width(Length::Fill)
            .height(IMAGE_HEIGHT)
            .content_fit(ContentFit::Cover),
    ]
    .spacing(8)
    .width(Length::FillPortion(1))
    .into()
}

fn parameter_view(parameter: &Parameter) -> Element<'_, Message> {
    let value = text(&parameter.value).size(18).font(Font::MONOSPACE);
    let value = if parameter.accent {
        value.style(text::primary)
    } else {
        value
    };

    column![section_label(parameter.label), value]
        .spacing(4)
        .into()
}
