//! Artifact renderers.
//!
//! Both renderers consume the same merged preset sequence, so every preset
//! named in the metadata has a rule pair in the stylesheet and vice versa.

pub mod metadata;
pub mod stylesheet;

pub use metadata::{PresetMeta, collect_metadata, render_metadata};
pub use stylesheet::{dark_selector, light_selector, render_stylesheet};

/// Name written into the "do not edit" banner of both artifacts.
pub const GENERATOR_NAME: &str = "preset-gen";

/// The two-line "do not edit" banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner<'a> {
    /// Tool that produced the file.
    pub generator: &'a str,
    /// Command that regenerates the file.
    pub command: &'a str,
}

impl<'a> Banner<'a> {
    pub const fn new(command: &'a str) -> Self {
        Self {
            generator: GENERATOR_NAME,
            command,
        }
    }

    fn lines(&self) -> [String; 2] {
        [
            format!("Auto-generated by {} -- DO NOT EDIT", self.generator),
            format!("Run: {}", self.command),
        ]
    }

    /// Banner as CSS block comments.
    pub fn css(&self) -> [String; 2] {
        self.lines().map(|line| format!("/* {line} */"))
    }

    /// Banner as line comments.
    pub fn line_comments(&self) -> [String; 2] {
        self.lines().map(|line| format!("// {line}"))
    }
}
