use serde::{Deserialize, Serialize};

/// Operator codes carried by binary and unary operation nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    LogicAnd,
    LogicOr,
    LogicXor,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    /// `<=>`
    NullEq,
    Plus,
    Minus,
    Mul,
    Div,
    /// `DIV`
    IntDiv,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    LeftShift,
    RightShift,
    Not,
    BitNeg,
    UnaryPlus,
    UnaryMinus,
}

/// The front end's own spelling of each opcode.
impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Opcode::LogicAnd => "and",
            Opcode::LogicOr => "or",
            Opcode::LogicXor => "xor",
            Opcode::Eq => "eq",
            Opcode::Ne => "ne",
            Opcode::Lt => "lt",
            Opcode::Le => "le",
            Opcode::Gt => "gt",
            Opcode::Ge => "ge",
            Opcode::NullEq => "nulleq",
            Opcode::Plus => "plus",
            Opcode::Minus => "minus",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::IntDiv => "intdiv",
            Opcode::Mod => "mod",
            Opcode::BitAnd => "bitand",
            Opcode::BitOr => "bitor",
            Opcode::BitXor => "bitxor",
            Opcode::LeftShift => "leftshift",
            Opcode::RightShift => "rightshift",
            Opcode::Not => "not",
            Opcode::BitNeg => "bitneg",
            Opcode::UnaryPlus => "unaryplus",
            Opcode::UnaryMinus => "unaryminus",
        };
        write!(f, "{}", name)
    }
}
