//! Operation Contract Value Object
//!
//! The request/response pair an operation was declared with. Two contracts
//! are equal only when both Rust types are identical.

use std::any::{type_name, TypeId};
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub struct Contract {
    request: TypeId,
    response: TypeId,
    request_name: &'static str,
    response_name: &'static str,
}

impl Contract {
    pub fn of<Req: 'static, Resp: 'static>() -> Self {
        Self {
            request: TypeId::of::<Req>(),
            response: TypeId::of::<Resp>(),
            request_name: type_name::<Req>(),
            response_name: type_name::<Resp>(),
        }
    }

    pub fn request_name(&self) -> &'static str {
        self.request_name
    }

    pub fn response_name(&self) -> &'static str {
        self.response_name
    }
}

impl PartialEq for Contract {
    fn eq(&self, other: &Self) -> bool {
        self.request == other.request && self.response == other.response
    }
}

impl Eq for Contract {}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({}) -> {}", self.request_name, self.response_name)
    }
}
