pub mod assignments;
pub mod documents;
