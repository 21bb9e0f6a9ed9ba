pub mod memory;
pub mod pool;
pub mod postgres;
pub mod repository;

pub use memory::MemoryInterviewRepository;
pub use postgres::PgInterviewRepository;
pub use repository::InterviewRepository;
