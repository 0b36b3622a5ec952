pub mod annotate;
pub mod cpu;
pub mod figure;
pub mod pipeline;
pub mod plan;
pub mod text;
