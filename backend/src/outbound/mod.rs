//! Driven adapters: concrete implementations of the domain's repository
//! ports.

pub mod persistence;
