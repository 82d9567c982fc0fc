//! Host graph snapshot: Blueprints, graph pages, nodes and pins.
//!
//! The host editor owns the live graph; this module holds a plain-data copy
//! exported from it. Nothing in the crate mutates a snapshot after loading.

mod blueprint;
mod builder;
mod model;

pub use blueprint::{Blueprint, Project};
pub use builder::GraphBuilder;
pub use model::{
    Graph, GraphNode, NodeGuid, NodeIndex, Pin, PinCategory, PinDirection, PinRef,
};
