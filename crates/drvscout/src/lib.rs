//! drvscout library - exposes the report sections for testing.

pub mod report;
