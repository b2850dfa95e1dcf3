// Navigation modes and the controls each mode exposes

use serde::{Deserialize, Serialize};

/// Screen-level navigation mode. Exactly one is active at a time; besides
/// the edit fields themselves it is the only mutable piece of workflow
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    Wikitext,
    AbuseFilterWarning,
    AbuseFilterDisallow,
    Preview,
    Captcha,
}

/// What the back control does in the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackAction {
    /// Return to the previous screen.
    Back,
    /// Dismiss the flow entirely (captcha entry).
    Dismiss,
}

/// What the forward control does in the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForwardAction {
    /// Advance to the preview step.
    Next,
    /// Publish the edit.
    Save,
}

/// Concrete navigation-control configuration for a mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationControls {
    pub back: BackAction,
    pub forward: Option<ForwardAction>,
    pub forward_enabled: bool,
}

impl NavigationControls {
    /// The fixed mode → controls table. Forward starts enabled wherever it
    /// exists; the workflow lowers it for captcha entry and in-flight
    /// uploads.
    pub fn for_mode(mode: NavigationMode) -> Self {
        let (back, forward) = match mode {
            NavigationMode::Wikitext => (BackAction::Back, Some(ForwardAction::Next)),
            NavigationMode::AbuseFilterWarning => (BackAction::Back, Some(ForwardAction::Save)),
            NavigationMode::AbuseFilterDisallow => (BackAction::Back, None),
            NavigationMode::Preview => (BackAction::Back, Some(ForwardAction::Save)),
            NavigationMode::Captcha => (BackAction::Dismiss, Some(ForwardAction::Save)),
        };
        Self {
            back,
            forward,
            forward_enabled: forward.is_some(),
        }
    }
}

/// Styling of the abuse-filter panel the presenter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPanelKind {
    Warning,
    Disallow,
}
