pub mod mentee;
pub mod mentor;
pub mod notification;
pub mod session;
pub mod user;

pub use mentee::{
    Mentee, NewRoadmapStepRequest, NewTaskRequest, RoadmapStep, Task, UpdateRoadmapStepRequest,
    UpdateTaskRequest,
};
pub use mentor::{Mentor, NewReviewRequest};
pub use notification::{Notification, NotificationKind};
pub use session::{BookSessionRequest, Session, SessionStatus};
pub use user::{AuthTokens, Role, User};
