pub mod selection_pipeline;
