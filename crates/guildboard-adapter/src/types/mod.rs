/*
[INPUT]:  Backend schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod envelope;
pub mod guild;
pub mod jsonrpc;
pub mod whitelist;

pub use envelope::*;
pub use guild::*;
pub use jsonrpc::*;
pub use whitelist::*;
