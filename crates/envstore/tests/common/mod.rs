//! Shared helpers for envstore HTTP tests

#![allow(dead_code)]

pub mod adapters;
pub mod fixtures;

// vim: ts=4
