pub mod annotation;
pub mod district;
pub mod drawing;
pub mod history;
pub mod project;
pub mod suggestion;
