pub mod memory;
pub mod repository;
pub mod seed;

pub use memory::InMemoryRepository;
pub use repository::{
    FeedbackRepository, MentorRepository, PortfolioRepository, ProgressRepository,
    SessionRepository, Storage, StorageError,
};
