pub mod annotation;
pub mod district;
pub mod drawing;
pub mod ingest;
pub mod project;
pub mod suggestion;
