//! D2EF Build Tools Library
//!
//! This library provides the core functionality for the two build-time
//! utilities on the disk2easyflash C64 side: embedding binary assets as
//! C byte arrays, and scanning assembly source for build dependencies.
//!
//! This program is unlicensed and dedicated to the public domain.
//! Developed by Tommy Olsen.

pub mod config;
pub mod embed_binaries;
pub mod scan_deps;
