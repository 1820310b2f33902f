//! Declared operator overloads.
//!
//! Produced by the binding pass from `---@operator` annotations, e.g.
//!
//! ```lua
//! ---@class Vector
//! ---@operator add(Vector): Vector
//! ---@operator unm: Vector
//! ---@operator index(integer): number
//! ```

use crate::types::LuaType;
use std::fmt;

/// Lua operator a declaration overloads, named after its metamethod.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeOperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Unm,
    IDiv,
    BAnd,
    BOr,
    BXor,
    Shl,
    Shr,
    BNot,
    Concat,
    Len,
    Eq,
    Lt,
    Le,
    Call,
    Index,
}

impl TypeOperatorKind {
    pub const ALL: [Self; 21] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Pow,
        Self::Unm,
        Self::IDiv,
        Self::BAnd,
        Self::BOr,
        Self::BXor,
        Self::Shl,
        Self::Shr,
        Self::BNot,
        Self::Concat,
        Self::Len,
        Self::Eq,
        Self::Lt,
        Self::Le,
        Self::Call,
        Self::Index,
    ];

    /// Annotation name of the operator (`add`, `unm`, `index`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Pow => "pow",
            Self::Unm => "unm",
            Self::IDiv => "idiv",
            Self::BAnd => "band",
            Self::BOr => "bor",
            Self::BXor => "bxor",
            Self::Shl => "shl",
            Self::Shr => "shr",
            Self::BNot => "bnot",
            Self::Concat => "concat",
            Self::Len => "len",
            Self::Eq => "eq",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Call => "call",
            Self::Index => "index",
        }
    }

    /// Parse an annotation name, case-insensitively. A leading `__` as in
    /// metamethod names (`__add`) is accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("__").unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// Operators taking a single operand.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Unm | Self::BNot | Self::Len)
    }
}

impl fmt::Display for TypeOperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `left <op> right -> result`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryOperator {
    pub kind: TypeOperatorKind,
    pub left: LuaType,
    pub right: LuaType,
    pub result: LuaType,
}

/// `<op> operand -> result`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnaryOperator {
    pub kind: TypeOperatorKind,
    pub operand: LuaType,
    pub result: LuaType,
}

/// `container[key] -> result`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexOperator {
    pub container: LuaType,
    pub key: LuaType,
    pub result: LuaType,
}

/// A declared operator overload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
    Index(IndexOperator),
}

impl TypeOperator {
    pub fn binary(kind: TypeOperatorKind, left: LuaType, right: LuaType, result: LuaType) -> Self {
        Self::Binary(BinaryOperator {
            kind,
            left,
            right,
            result,
        })
    }

    pub fn unary(kind: TypeOperatorKind, operand: LuaType, result: LuaType) -> Self {
        Self::Unary(UnaryOperator {
            kind,
            operand,
            result,
        })
    }

    pub fn index(container: LuaType, key: LuaType, result: LuaType) -> Self {
        Self::Index(IndexOperator {
            container,
            key,
            result,
        })
    }

    /// Kind the operator is filed under. Index operators always use
    /// [`TypeOperatorKind::Index`].
    pub const fn kind(&self) -> TypeOperatorKind {
        match self {
            Self::Binary(op) => op.kind,
            Self::Unary(op) => op.kind,
            Self::Index(_) => TypeOperatorKind::Index,
        }
    }

    pub fn result(&self) -> &LuaType {
        match self {
            Self::Binary(op) => &op.result,
            Self::Unary(op) => &op.result,
            Self::Index(op) => &op.result,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryOperator> {
        match self {
            Self::Binary(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_unary(&self) -> Option<&UnaryOperator> {
        match self {
            Self::Unary(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<&IndexOperator> {
        match self {
            Self::Index(op) => Some(op),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/operator_tests.rs"]
mod tests;
