/// ICED GUI Application Module
mod client_row;

use iced::{
    executor, keyboard, window, Alignment, Application, Command, Element, Length, Settings,
    Subscription, Theme,
    alignment::Horizontal,
    widget::{image::Handle, Column, Container, Text},
};
use std::collections::BTreeMap;
use crate::config::PickerConfig;
use crate::icons::{client_icon, load_window_icon};
use crate::selection::{MailClient, SelectionController, VisibilityEffect};
use client_row::render_client_row;

#[derive(Debug, Clone)]
pub enum Message {
    /// The button bound to a client was pressed
    ClientSelected(MailClient),
    /// Cmd/Ctrl+Q
    QuitRequested,
}

pub struct MailPicker {
    config: PickerConfig,
    controller: SelectionController,

    // Effect last returned by the controller, applied by `view`
    effect: VisibilityEffect,

    icons: BTreeMap<MailClient, Handle>,
}

impl MailPicker {
    pub fn effect(&self) -> VisibilityEffect {
        self.effect
    }

    pub fn selected(&self) -> Option<MailClient> {
        self.controller.current()
    }
}

impl Application for MailPicker {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = PickerConfig;

    fn new(config: PickerConfig) -> (Self, Command<Message>) {
        let icons = MailClient::ALL
            .into_iter()
            .filter_map(|client| {
                let path = config.icon_for(client)?;
                client_icon(path).map(|handle| (client, handle))
            })
            .collect();

        let controller = SelectionController::new();
        let app = MailPicker {
            effect: controller.effect(),
            controller,
            config,
            icons,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        self.config.window_title.clone()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ClientSelected(client) => {
                self.effect = self.controller.select(client);
                println!("{} selected", client);
                Command::none()
            }

            Message::QuitRequested => {
                tracing::info!("Quit requested");
                window::close(window::Id::MAIN)
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let mut content = Column::new()
            .spacing(20)
            .padding(20)
            .align_items(Alignment::Center)
            .push(
                Text::new(&self.config.prompt)
                    .size(40)
                    .width(Length::Fill)
                    .horizontal_alignment(Horizontal::Center),
            );

        for (client, visible) in self.effect.iter() {
            content = content.push(render_client_row(client, self.icons.get(&client), visible));
        }

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(quit_shortcut)
    }
}

fn quit_shortcut(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("q") && modifiers.command() => {
            Some(Message::QuitRequested)
        }
        _ => None,
    }
}

pub fn run(config: PickerConfig) -> iced::Result {
    let icon = config
        .window_icon_path
        .as_deref()
        .and_then(|path| match load_window_icon(path) {
            Ok(icon) => Some(icon),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        });

    let window = window::Settings {
        size: iced::Size::new(config.window_width, config.window_height),
        position: window::Position::Centered,
        resizable: false,
        icon,
        ..Default::default()
    };

    MailPicker::run(Settings {
        window,
        ..Settings::with_flags(config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> MailPicker {
        let (app, _) = MailPicker::new(PickerConfig::default());
        app
    }

    #[test]
    fn test_starts_with_indicators_hidden() {
        let app = picker();
        assert_eq!(app.selected(), None);
        assert_eq!(app.effect(), VisibilityEffect::hidden());
        assert_eq!(app.title(), "Demo App");
    }

    #[test]
    fn test_click_applies_controller_effect() {
        let mut app = picker();
        let _ = app.update(Message::ClientSelected(MailClient::AppleMail));
        assert_eq!(app.effect(), VisibilityEffect::only(MailClient::AppleMail));

        let _ = app.update(Message::ClientSelected(MailClient::Outlook));
        assert_eq!(app.selected(), Some(MailClient::Outlook));
        assert!(!app.effect().is_visible(MailClient::AppleMail));
        assert!(app.effect().is_visible(MailClient::Outlook));
    }

    #[test]
    fn test_missing_client_icons_are_skipped() {
        let mut config = PickerConfig::default();
        config
            .client_icons
            .insert(MailClient::Outlook, "/nonexistent/outlook.png".into());

        let (app, _) = MailPicker::new(config);
        assert!(app.icons.is_empty());
    }

    #[test]
    fn test_quit_shortcut() {
        let q = keyboard::Key::Character("q".into());
        assert!(matches!(
            quit_shortcut(q.clone(), keyboard::Modifiers::COMMAND),
            Some(Message::QuitRequested)
        ));
        assert!(quit_shortcut(q, keyboard::Modifiers::empty()).is_none());
        // Caps Lock reports the upper-case character
        assert!(matches!(
            quit_shortcut(keyboard::Key::Character("Q".into()), keyboard::Modifiers::COMMAND),
            Some(Message::QuitRequested)
        ));
        assert!(quit_shortcut(
            keyboard::Key::Character("w".into()),
            keyboard::Modifiers::COMMAND
        )
        .is_none());
    }
}
