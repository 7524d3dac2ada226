// Application layer: concrete pipelines wiring storage and config into the selector.

pub mod pipelines;
