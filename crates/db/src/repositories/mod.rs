pub mod annotation_repo;
pub mod district_repo;
pub mod drawing_repo;
pub mod history_repo;
pub mod project_repo;
pub mod suggestion_repo;

pub use annotation_repo::AnnotationRepo;
pub use district_repo::DistrictRepo;
pub use drawing_repo::DrawingRepo;
pub use history_repo::HistoryRepo;
pub use project_repo::ProjectRepo;
pub use suggestion_repo::{ModerationError, SuggestionRepo};
