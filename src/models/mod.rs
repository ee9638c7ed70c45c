pub mod feedback;
pub mod user;

pub use feedback::{CategoryCount, Feedback, FeedbackWithAuthor};
pub use user::{PublicUser, Role, User};
