/// AST (Abstract Syntax Tree) module
/// Contains the syntax model the typing layer consumes. The parser and the
/// post-parse pass produce these nodes; nothing here parses text.
///
/// Submodules:
/// - ast: Core node trait, node kinds and wrapper
/// - expressions: Literals, operators, references and containers
/// - statements: Blocks, declarations, assignments and control flow
/// - types: Callable node kinds and their signatures
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
