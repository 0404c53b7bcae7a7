/// Reasons a line could not be turned into a statement. The messages are
/// printed back to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrepareError {
    #[error("REV must be positive.")]
    NegativeRev,
    #[error("String is too long.")]
    StringTooLong,
    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,
    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),
}
