//! Rendering of type values in Lua annotation syntax.
//!
//! Used for hover text and diagnostics:
//!
//! | Type | Rendering |
//! |------|-----------|
//! | union | `integer|string` |
//! | tuple | `[integer, string]` |
//! | array | `integer[]`, `(integer|string)[]` |
//! | generic | `Map<string, integer>` |
//! | literals | `"on"`, `42` |
//! | table literal | `table@3:17` |
//! | variadic / expand | `...T` / `T...` |
//! | multi-return | `(integer, string)`, `(integer...)` |

use crate::types::{LuaType, MultiReturn};
use std::fmt;

impl fmt::Display for LuaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Unknown => f.write_str("unknown"),
            Self::Nil => f.write_str("nil"),
            Self::Named(name) => f.write_str(name),
            Self::Expand(name) => write!(f, "{name}..."),
            Self::Union(union) => write_joined(f, union.members().iter(), "|"),
            Self::Tuple(tuple) => {
                f.write_str("[")?;
                write_joined(f, tuple.types(), ", ")?;
                f.write_str("]")
            }
            Self::Array(element) => {
                if needs_parens(element) {
                    write!(f, "({element})[]")
                } else {
                    write!(f, "{element}[]")
                }
            }
            Self::Generic(generic) => {
                write!(f, "{}<", generic.name)?;
                write_joined(f, generic.args.iter(), ", ")?;
                f.write_str(">")
            }
            Self::StringLiteral(content) => write!(f, "\"{}\"", content.escape_default()),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::TableLiteral(syntax) => write!(f, "table@{syntax}"),
            Self::DocTable(syntax) => write!(f, "doc-table@{syntax}"),
            Self::Variadic(element) => write!(f, "...{element}"),
            Self::MultiReturn(MultiReturn::List(types)) => {
                f.write_str("(")?;
                write_joined(f, types.iter(), ", ")?;
                f.write_str(")")
            }
            Self::MultiReturn(MultiReturn::Repeat(base)) => write!(f, "({base}...)"),
        }
    }
}

fn needs_parens(ty: &LuaType) -> bool {
    matches!(ty, LuaType::Union(_) | LuaType::Variadic(_))
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    types: impl Iterator<Item = &'a LuaType>,
    separator: &str,
) -> fmt::Result {
    for (i, ty) in types.enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
