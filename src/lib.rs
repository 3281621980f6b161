//! Procedural icon set for the Fillr browser extension.
//!
//! [`design::draw_icon`] renders the artwork at any size onto a
//! [`canvas::Canvas`]; [`icon_gen::generate_icons`] drives a whole run and
//! writes the PNG files (plus the optional ICO bundle and manifest fragment).

pub mod canvas;
pub mod design;
pub mod icon_gen;
pub mod manifest;
