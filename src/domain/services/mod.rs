//! # Domain Services
//!
//! 特定のエンティティに属さないビジネスルール

pub mod path_combiner;
