//! Email client selection
//!
//! Defines the selection core hosted by the picker window:
//! - MailClient: the fixed set of clients the user can pick from
//! - SelectionState: which client is currently picked, if any
//! - VisibilityEffect: which "selected" indicators the window should show
//! - SelectionController: owns the state and turns a pick into an effect

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Email clients offered by the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailClient {
    // Declaration order is the order of `ALL`
    AppleMail = 0,
    Outlook = 1,
}

impl MailClient {
    pub const COUNT: usize = 2;

    /// Every client, in the order the window lists them
    pub const ALL: [MailClient; MailClient::COUNT] = [MailClient::AppleMail, MailClient::Outlook];

    pub fn display_name(self) -> &'static str {
        match self {
            MailClient::AppleMail => "macOS Mail",
            MailClient::Outlook => "Outlook",
        }
    }

    /// Position within `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    fn identifier(self) -> &'static str {
        match self {
            MailClient::AppleMail => "apple_mail",
            MailClient::Outlook => "outlook",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            MailClient::AppleMail => "mail",
            MailClient::Outlook => "outlook",
        }
    }
}

impl std::fmt::Display for MailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raised when a name does not identify any known client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown email client: '{input}'")]
pub struct InvalidOptionError {
    pub input: String,
}

impl FromStr for MailClient {
    type Err = InvalidOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MailClient::ALL
            .into_iter()
            .find(|client| {
                [client.identifier(), client.display_name(), client.short_name()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| InvalidOptionError {
                input: s.to_string(),
            })
    }
}

/// The client currently picked; unset until the first pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub current: Option<MailClient>,
}

/// Indicator visibility for every client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEffect {
    visible: [bool; MailClient::COUNT],
}

impl VisibilityEffect {
    /// All indicators hidden
    pub fn hidden() -> Self {
        VisibilityEffect {
            visible: [false; MailClient::COUNT],
        }
    }

    /// Only `client`'s indicator shown
    pub fn only(client: MailClient) -> Self {
        let mut effect = Self::hidden();
        effect.visible[client.index()] = true;
        effect
    }

    pub fn is_visible(&self, client: MailClient) -> bool {
        self.visible[client.index()]
    }

    pub fn visible_client(&self) -> Option<MailClient> {
        MailClient::ALL
            .into_iter()
            .find(|client| self.is_visible(*client))
    }

    pub fn iter(&self) -> impl Iterator<Item = (MailClient, bool)> + '_ {
        MailClient::ALL
            .into_iter()
            .map(move |client| (client, self.is_visible(client)))
    }
}

impl Default for VisibilityEffect {
    fn default() -> Self {
        Self::hidden()
    }
}

impl From<SelectionState> for VisibilityEffect {
    fn from(state: SelectionState) -> Self {
        match state.current {
            Some(client) => VisibilityEffect::only(client),
            None => VisibilityEffect::hidden(),
        }
    }
}

/// Sole owner of the selection state for one picker session
#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<MailClient> {
        self.state.current
    }

    /// Effect matching the current state
    pub fn effect(&self) -> VisibilityEffect {
        self.state.into()
    }

    /// Pick `client`, from any prior state including `client` itself
    pub fn select(&mut self, client: MailClient) -> VisibilityEffect {
        let previous = self.state.current.replace(client);
        tracing::info!(
            client = client.display_name(),
            changed = previous != Some(client),
            "email client selected"
        );
        self.effect()
    }

    /// Pick a client by name; unknown names leave the state untouched
    pub fn select_named(&mut self, name: &str) -> Result<VisibilityEffect, InvalidOptionError> {
        match name.parse::<MailClient>() {
            Ok(client) => Ok(self.select(client)),
            Err(e) => {
                tracing::warn!("Rejected selection: {}", e);
                Err(e)
            }
        }
    }
}
