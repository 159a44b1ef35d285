//! Shared Module
//!
//! This module contains types that are shared between the server and its
//! clients. All types are designed for JSON serialization and transmission
//! over HTTP.

/// RPC request/response wire types
pub mod wire;

/// Re-export commonly used types for convenience
pub use wire::{
    DataItem, GetRequest, GetResponse, LoginRequest, LoginResponse, LogoutRequest, PostRequest,
    Status, StatusResponse, UPDATE_DELIMITER,
};
