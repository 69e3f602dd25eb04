//! Services holding business rules that controllers delegate to

pub mod users;

pub use users::UsersService;
