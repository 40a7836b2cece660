mod command;
mod engine;

pub use engine::TesseractEngine;
