pub mod catalog;
pub mod classify;
pub mod glossary;
pub mod sequence;
pub mod suggest;
pub mod topk;
