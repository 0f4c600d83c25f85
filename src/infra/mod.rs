//! Infrastructure adapters.

pub mod db;
