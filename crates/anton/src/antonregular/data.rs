// generated by anton-gen; DO NOT EDIT

//! Module `antonregular` provides the "Anton Regular" TrueType font
//! from the Anton font family.

/// TTF is the data for the "Anton Regular" TrueType font.
pub static TTF: &[u8] = include_bytes!("Anton-Regular.ttf");
