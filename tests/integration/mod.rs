//! Integration tests for the vx.json rebuild

mod rebuild_tree;
mod support;
