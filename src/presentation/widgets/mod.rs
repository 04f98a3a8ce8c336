mod input;
mod process_feed;
mod process_form;
mod status_bar;

pub use input::TextField;
pub use process_feed::{LoadOutcome, LoadTicket, ProcessFeed, ProcessFeedState, ProcessFeedStyle};
pub use process_form::{FormField, ProcessForm, ProcessFormState};
pub use status_bar::{StatusBar, StatusLevel};
