pub mod calendar;
pub mod event;
pub mod owner;

pub use calendar::{Calendar, CalendarId, NewCalendar};
pub use event::{Event, EventId, NewEvent};
pub use owner::OwnerRecord;
