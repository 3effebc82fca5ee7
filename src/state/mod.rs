//! Page state: markup model, timers and the four page controllers

mod forms;
mod markup;
mod notifications;
mod scroll;
mod theme;
mod timers;
mod typewriter;

pub use forms::*;
pub use markup::*;
pub use notifications::*;
pub use scroll::*;
pub use theme::*;
pub use timers::*;
pub use typewriter::*;
