//! Operator spellings.

use crate::dialect::Opcode;

/// SQL spelling of a binary or unary opcode.
///
/// Opcodes without a symbolic form keep their front-end name.
pub fn op_to_name(op: Opcode) -> String {
    let symbol = match op {
        Opcode::Eq => "=",
        Opcode::Ne => "!=",
        Opcode::Lt => "<",
        Opcode::Le => "<=",
        Opcode::Gt => ">",
        Opcode::Ge => ">=",
        Opcode::NullEq => "<=>",
        Opcode::Plus => "+",
        Opcode::Minus => "-",
        Opcode::Mul => "*",
        Opcode::Div => "/",
        Opcode::Mod => "%",
        Opcode::BitAnd => "&",
        Opcode::BitOr => "|",
        Opcode::BitXor => "^",
        Opcode::LeftShift => "<<",
        Opcode::RightShift => ">>",
        other => return other.to_string(),
    };
    symbol.to_string()
}
