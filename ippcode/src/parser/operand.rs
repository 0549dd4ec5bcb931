use crate::grammar::OperandKind;
use crate::instruction::operand::ResolvedKind;
use crate::lexical::{self, LexicalFamily};
use crate::parser::error::OperandError;

/// Decide what `token` is, given the kind the grammar expects in its slot.
/// Returns the resolved kind and the literal text to emit.
pub fn classify(
    token: &str,
    expected: OperandKind,
) -> Result<(ResolvedKind, &str), OperandError> {
    let resolved = match expected {
        OperandKind::Variable if lexical::is_variable(token) => {
            Some((ResolvedKind::Family(LexicalFamily::Variable), token))
        }
        OperandKind::Symbol => classify_symbol(token),
        OperandKind::Type if lexical::is_type(token) => Some((ResolvedKind::Type, token)),
        OperandKind::Label if lexical::is_label(token) => Some((ResolvedKind::Label, token)),
        OperandKind::Variable | OperandKind::Type | OperandKind::Label => None,
    };

    resolved.ok_or(OperandError::for_kind(expected))
}

/// Variable reference first, then `type@literal`.
fn classify_symbol(token: &str) -> Option<(ResolvedKind, &str)> {
    if lexical::is_variable(token) {
        return Some((ResolvedKind::Family(LexicalFamily::Variable), token));
    }
    lexical::split_literal(token).map(|(family, literal)| (ResolvedKind::Family(family), literal))
}
