//! Mail Picker Library
//!
//! A small window offering a choice of email client. The selection logic lives in
//! `selection`; everything else hosts it.

pub mod config;
pub mod gui;
pub mod icons;
pub mod selection;
