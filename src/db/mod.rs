pub mod feedback;
pub mod users;
