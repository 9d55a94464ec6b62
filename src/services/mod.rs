pub mod assistant;
pub mod mentees;
pub mod notifications;
pub mod poller;
pub mod roster;
pub mod sessions;

pub use assistant::ChatAssistant;
pub use mentees::MenteeService;
pub use notifications::{NotificationService, NotificationStore};
pub use poller::PollerHandle;
pub use roster::{RosterService, RosterStore, RosterUpdate};
pub use sessions::{SessionService, SessionStore};
