//! Repositories for database operations

pub mod facility;
pub mod finance;
pub mod rent;
pub mod report;
pub mod room;
pub mod room_type;
pub mod tenant;
pub mod user;

pub use facility::FacilityRepository;
pub use finance::FinanceRepository;
pub use rent::RentRepository;
pub use report::ReportRepository;
pub use room::RoomRepository;
pub use room_type::RoomTypeRepository;
pub use tenant::TenantRepository;
pub use user::{PgUserStore, UserStore};
