// Edit-Submission Workflow Module
//
// Implements the navigation-mode state machine with dependency injection
// for the uploader, presenter, and completion seams.

pub mod navigation;
pub mod state_machine;
pub mod traits;

#[cfg(test)]
pub mod mocks;


pub use navigation::{
    BackAction, FilterPanelKind, ForwardAction, NavigationControls, NavigationMode,
};
pub use state_machine::{DismissalHandle, EditSubmissionWorkflow};
pub use traits::{Presenter, SaveDelegate, Uploader};
