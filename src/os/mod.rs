//! Platform entropy
//!
//! Thin wrappers around the operating system randomness APIs, selected
//! at compile time. Every platform module exposes the same
//! `sys_random` function so the rest of the crate stays portable.
//!
//! The OS entropy pool is only ever used to seed the ChaCha20 CSPRNG;
//! all other randomness in the crate flows through [`crate::rng`].

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
