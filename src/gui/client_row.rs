/// One row of the picker: client icon, selection button, "selected" indicator
use iced::{
    Alignment, Element, Length,
    widget::{image::Handle, Button, Container, Image, Row, Space, Text},
};
use crate::gui::Message;
use crate::selection::MailClient;

const ICON_SIZE: f32 = 80.0;
const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 60.0;
const INDICATOR_SIZE: f32 = 40.0;
const SELECTED_MARK: &str = "✅";

pub fn render_client_row(
    client: MailClient,
    icon: Option<&Handle>,
    indicator_visible: bool,
) -> Element<'static, Message> {
    let icon: Element<'static, Message> = match icon {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(ICON_SIZE))
            .height(Length::Fixed(ICON_SIZE))
            .into(),
        // No image configured
        None => Container::new(Text::new("✉").size(48))
            .width(Length::Fixed(ICON_SIZE))
            .height(Length::Fixed(ICON_SIZE))
            .center_x()
            .center_y()
            .into(),
    };

    let button = Button::new(
        Container::new(Text::new(client.display_name()).size(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y(),
    )
    .on_press(Message::ClientSelected(client))
    .width(Length::Fixed(BUTTON_WIDTH))
    .height(Length::Fixed(BUTTON_HEIGHT));

    let indicator: Element<'static, Message> = if indicator_visible {
        Container::new(Text::new(SELECTED_MARK).size(20))
            .width(Length::Fixed(INDICATOR_SIZE))
            .height(Length::Fixed(INDICATOR_SIZE))
            .center_x()
            .center_y()
            .into()
    } else {
        Space::new(Length::Fixed(INDICATOR_SIZE), Length::Fixed(INDICATOR_SIZE)).into()
    };

    Row::new()
        .spacing(80)
        .align_items(Alignment::Center)
        .push(icon)
        .push(button)
        .push(indicator)
        .into()
}
