pub mod balance;
pub mod cache;
pub mod errors;
pub mod hash_function;
pub mod merkle_hash;
pub mod node;
pub mod parallel;
pub mod proof;
pub mod trampoline;
pub mod tree;
pub mod value_objects;

pub use balance::*;
pub use cache::*;
pub use errors::*;
pub use hash_function::*;
pub use merkle_hash::*;
pub use node::*;
pub use parallel::*;
pub use proof::*;
pub use trampoline::*;
pub use tree::*;
pub use value_objects::*;
